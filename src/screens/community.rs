use crate::model::Post;

const POSTS: &[Post] = &[
    Post {
        id: 1,
        author: "Aarohi Jain",
        time: "14 hours ago",
        category: "Nutrition",
        title: "Must-Try Superfoods to Elevate Your Nutrition Game!",
        content: &[
            "Did you know that avocados contain more potassium than bananas? One medium avocado has about 485 mg of potassium, while a medium banana has around 422 mg.",
            "Chia seeds are an excellent source of omega-3 fatty acids. Just 2 tablespoons of chia seeds contain around 4.9 grams of these healthy fats.",
            "Dark chocolate is rich in antioxidants. One ounce of dark chocolate (70-85% cocoa) contains more than 50% of the daily recommended intake.",
        ],
    },
    Post {
        id: 2,
        author: "Ravi Sharma",
        time: "1 day ago",
        category: "Fitness",
        title: "3 Simple Ways to Boost Your Daily Step Count",
        content: &[
            "Take short walking breaks every hour while working.",
            "Do household chores actively, sweeping and cleaning can add steps!",
            "Park your car farther from entrances to walk more without effort.",
        ],
    },
];

/// The community tab. Posts are bundled with the app for now.
pub fn feed() -> &'static [Post] {
    POSTS
}

pub fn by_category(category: &str) -> impl Iterator<Item = &'static Post> + '_ {
    POSTS
        .iter()
        .filter(move |post| post.category.eq_ignore_ascii_case(category))
}
