use std::collections::HashMap;

use folio_lib::{ApiClient, ProfilePage, editor::Viewer};
use iced::{
    Element, Length, Task,
    widget::{canvas, column, container, image, row, scrollable},
};
use tracing::warn;

pub mod activity_graph;
pub mod badges;
pub mod basic_info;
pub mod stats;

#[derive(Debug, Clone)]
pub enum Message {
    EditPressed,
    OpenUrl(String),
    BadgeLoaded {
        achievement_id: i64,
        result: Result<Vec<u8>, String>,
    },
}

pub enum Action {
    None,
    Run(Task<Message>),
    Edit,
    OpenUrl(String),
}

/// Read-only profile screen: basic info, stats, activity chart, badges.
///
/// All display data comes in through [`view`](Self::view); the only state
/// held here is memoized render resources (fetched badge images and the
/// chart's geometry cache).
pub struct Tab {
    badges: HashMap<i64, image::Handle>,
    chart_cache: canvas::Cache,
}

impl Tab {
    pub fn new(client: &ApiClient, page: &ProfilePage) -> (Self, Task<Message>) {
        let fetches = page.achievement.model.iter().map(|unlock| {
            let client = client.clone();
            let achievement_id = unlock.id;
            let url = unlock.achievement.badge_url.clone();

            Task::perform(
                async move { client.fetch_badge(&url).await.map_err(|err| err.to_string()) },
                move |result| Message::BadgeLoaded {
                    achievement_id,
                    result,
                },
            )
        });

        (
            Self {
                badges: HashMap::new(),
                chart_cache: canvas::Cache::new(),
            },
            Task::batch(fetches),
        )
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::EditPressed => Action::Edit,
            Message::OpenUrl(url) => Action::OpenUrl(url),
            Message::BadgeLoaded {
                achievement_id,
                result,
            } => {
                match result {
                    Ok(bytes) => {
                        self.badges
                            .insert(achievement_id, image::Handle::from_bytes(bytes));
                    }
                    // A card without its image still shows name and dates
                    Err(error) => warn!("badge image fetch failed: {error}"),
                }
                Action::None
            }
        }
    }

    pub fn view<'a>(
        &'a self,
        page: &'a ProfilePage,
        viewer: Option<&'a Viewer>,
    ) -> Element<'a, Message> {
        let editor = &page.editor;

        let mut middle =
            row![container(stats::view(editor)).width(Length::FillPortion(3))].spacing(24);
        if let Some(graph) = activity_graph::view(editor, &self.chart_cache) {
            middle = middle.push(container(graph).width(Length::FillPortion(9)));
        }

        scrollable(
            column![
                basic_info::view(editor, viewer),
                middle,
                badges::view(&page.achievement, &self.badges),
            ]
            .spacing(24)
            .padding(20),
        )
        .into()
    }
}
