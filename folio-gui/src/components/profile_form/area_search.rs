use folio_lib::{ApiClient, editor::Area};
use iced::{
    Element, Task,
    widget::{button, column, row, text, text_input},
};
use tracing::warn;

#[derive(Debug, Clone)]
pub enum Message {
    QueryInput(String),
    ResultsLoaded { query: String, results: Vec<Area> },
    SearchFailed { query: String, error: String },
    Picked(Area),
    Cleared,
}

pub enum Action {
    None,
    Run(Task<Message>),
}

/// Async search-select for areas.
///
/// Each completion message carries the query it answered; anything that
/// arrives for a query the user has since typed past is dropped.
pub struct AreaSearch {
    client: ApiClient,
    query: String,
    results: Vec<Area>,
    selected: Option<Area>,
    searching: bool,
}

impl AreaSearch {
    pub fn new(client: ApiClient, selected: Option<Area>) -> Self {
        Self {
            client,
            query: String::new(),
            results: Vec::new(),
            selected,
            searching: false,
        }
    }

    pub fn selected(&self) -> Option<&Area> {
        self.selected.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::QueryInput(query) => {
                self.query = query.clone();

                if query.trim().is_empty() {
                    self.results.clear();
                    self.searching = false;
                    return Action::None;
                }

                self.searching = true;
                let client = self.client.clone();

                Action::Run(Task::future(async move {
                    match client.search_areas(query.trim()).await {
                        Ok(results) => Message::ResultsLoaded { query, results },
                        Err(err) => Message::SearchFailed {
                            query,
                            error: err.to_string(),
                        },
                    }
                }))
            }
            Message::ResultsLoaded { query, results } => {
                // Answer to a query the user has already typed past
                if query != self.query {
                    return Action::None;
                }

                self.searching = false;
                self.results = results;
                Action::None
            }
            Message::SearchFailed { query, error } => {
                if query == self.query {
                    self.searching = false;
                    warn!("area search failed: {error}");
                }
                Action::None
            }
            Message::Picked(area) => {
                self.selected = Some(area);
                self.query.clear();
                self.results.clear();
                self.searching = false;
                Action::None
            }
            Message::Cleared => {
                self.selected = None;
                Action::None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let current: Element<'_, Message> = match &self.selected {
            Some(area) => row![
                text(&area.name),
                button(text("Clear"))
                    .style(button::text)
                    .on_press(Message::Cleared),
            ]
            .spacing(8)
            .into(),
            None => text("No area set").size(12).into(),
        };

        let mut content = column![
            text("Area"),
            current,
            text_input("Select area...", &self.query).on_input(Message::QueryInput),
        ]
        .spacing(4);

        if self.searching {
            content = content.push(text("Searching...").size(12));
        }

        for area in &self.results {
            content = content.push(
                button(text(&area.name))
                    .style(button::text)
                    .on_press(Message::Picked(area.clone())),
            );
        }

        content.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn search() -> AreaSearch {
        AreaSearch::new(ApiClient::new("http://localhost:9099"), None)
    }

    fn area(id: i64, name: &str) -> Area {
        Area {
            id,
            name: name.to_owned(),
        }
    }

    #[test]
    fn test_empty_query_runs_no_search() {
        let mut search = search();

        let action = search.update(Message::QueryInput("   ".to_owned()));

        assert!(matches!(action, Action::None));
        assert!(!search.searching);
    }

    #[test]
    fn test_query_starts_search() {
        let mut search = search();

        let action = search.update(Message::QueryInput("Rey".to_owned()));

        assert!(matches!(action, Action::Run(_)));
        assert!(search.searching);
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let mut search = search();
        search.update(Message::QueryInput("Rey".to_owned()));
        search.update(Message::QueryInput("Reyk".to_owned()));

        search.update(Message::ResultsLoaded {
            query: "Rey".to_owned(),
            results: vec![area(1, "Reyes")],
        });

        assert!(search.results.is_empty());
        assert!(search.searching);

        search.update(Message::ResultsLoaded {
            query: "Reyk".to_owned(),
            results: vec![area(3, "Reykjavik")],
        });

        assert_eq!(search.results.len(), 1);
        assert!(!search.searching);
    }

    #[test]
    fn test_pick_and_clear() {
        let mut search = search();
        search.update(Message::QueryInput("Rey".to_owned()));
        search.update(Message::ResultsLoaded {
            query: "Rey".to_owned(),
            results: vec![area(3, "Reykjavik")],
        });

        search.update(Message::Picked(area(3, "Reykjavik")));

        assert_eq!(search.selected().map(|area| area.id), Some(3));
        assert!(search.results.is_empty());
        assert!(search.query.is_empty());

        search.update(Message::Cleared);

        assert!(search.selected().is_none());
    }
}
