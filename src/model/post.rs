/// A community feed entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Post {
    pub id: u32,
    pub author: &'static str,
    pub time: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub content: &'static [&'static str],
}
