use crate::model::{
    analysis::{HealthRating, Ingredient, ShoppingItem, Video},
    AnalysisResponse,
};

const DEFAULT_TITLE: &str = "Product Analysis";
const NO_INTRODUCTION: &str = "No product information available";

/// What the display screen renders for one analysis.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayView<'a> {
    /// Nothing usable came back.
    Empty,
    Product(ProductView<'a>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductView<'a> {
    pub title: &'a str,
    pub image_url: Option<&'a str>,
    pub introduction: &'a str,
    pub ingredients: &'a [Ingredient],
    pub videos: &'a [Video],
    pub shopping: &'a [ShoppingItem],
}

impl<'a> DisplayView<'a> {
    pub fn new(data: Option<&'a AnalysisResponse>) -> DisplayView<'a> {
        let Some(data) = data else {
            return DisplayView::Empty;
        };
        let Some(analysis) = &data.analysis else {
            return DisplayView::Empty;
        };

        DisplayView::Product(ProductView {
            title: non_empty(analysis.product_name.as_deref()).unwrap_or(DEFAULT_TITLE),
            image_url: non_empty(data.image_url.as_deref()),
            introduction: non_empty(analysis.introduction.as_deref()).unwrap_or(NO_INTRODUCTION),
            ingredients: &analysis.ingredients,
            videos: data
                .video_results
                .as_ref()
                .map(|results| results.videos.as_slice())
                .unwrap_or_default(),
            shopping: data
                .shopping_results
                .as_ref()
                .map(|results| results.shopping.as_slice())
                .unwrap_or_default(),
        })
    }
}

impl ProductView<'_> {
    /// Urls the user can open from this screen, videos first.
    pub fn links(&self) -> Vec<&str> {
        let videos = self.videos.iter().filter_map(|video| video.url.as_deref());
        let shopping = self.shopping.iter().filter_map(|item| item.url.as_deref());
        videos
            .chain(shopping)
            .filter(|url| !url.is_empty())
            .collect()
    }
}

/// Badge color for an ingredient's rating.
pub fn rating_color(rating: &HealthRating) -> &'static str {
    match rating {
        HealthRating::Good => "#4caf50",
        HealthRating::Moderate => "#ff9800",
        HealthRating::Poor | HealthRating::Other(_) => "#f44336",
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
