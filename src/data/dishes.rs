use crate::modules::dish::repository::Dish;

fn dish(id: &str, name: &str, description: &str, price: u64, image_url: &str) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: image_url.to_string(),
    }
}

pub fn dishes() -> Vec<Dish> {
    vec![
        dish(
            "3c637d011d844ebab1205fef8a7e36ea",
            "Century Eggs",
            "Whole eggs preserved in clay and ash for a few months",
            17,
            "https://images.pexels.com/photos/5903216/pexels-photo-5903216.jpeg",
        ),
        dish(
            "d351db2b49b69679504652ea1cf38241",
            "Dolcelatte and chickpea spaghetti",
            "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
            19,
            "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg",
        ),
        dish(
            "90c3d873684bf381dfab29034b5bba73",
            "Falafel and tahini bagel",
            "A warm bagel filled with falafel and tahini",
            6,
            "https://images.pexels.com/photos/4560606/pexels-photo-4560606.jpeg",
        ),
        dish(
            "f8165a2df5e5d8b0f9bd2bd3b3aa6ad5",
            "Spinach and cheese burrito",
            "A flour tortilla stuffed with spinach, rice and melted cheese",
            11,
            "https://images.pexels.com/photos/5737247/pexels-photo-5737247.jpeg",
        ),
    ]
}
