use folio_lib::{ApiClient, ProfilePage, Viewer};
use iced::{
    Element, Task, Theme, application,
    widget::{center, column, text},
};
use tracing::{Level, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        profile_form::{self, ProfileForm},
        profile_tab::{self, Tab},
    },
    config::GuiConfig,
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    PageLoaded(Result<ProfilePage, String>),
    ProfileTab(profile_tab::Message),
    ProfileForm(profile_form::Message),
}

enum Screen {
    Loading,
    Failed(String),
    Profile(Tab),
    Edit(ProfileForm),
}

struct App {
    title: String,
    theme: Theme,
    client: ApiClient,
    base_url: String,
    viewer: Option<Viewer>,
    // Last page the server gave us; the source for both screens
    page: Option<ProfilePage>,
    screen: Screen,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let cfg = GuiConfig::load();
        let client = ApiClient::new(cfg.server.base_url.clone());

        (
            Self {
                title: "Folio".into(),
                theme: cfg.theme(),
                client: client.clone(),
                viewer: cfg.server.viewer_id.map(|id| Viewer { id }),
                base_url: cfg.server.base_url,
                page: None,
                screen: Screen::Loading,
            },
            load_page(client, cfg.server.editor_id),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageLoaded(Ok(page)) => {
                let (tab, task) = Tab::new(&self.client, &page);
                self.page = Some(page);
                self.screen = Screen::Profile(tab);
                task.map(Message::ProfileTab)
            }
            Message::PageLoaded(Err(error)) => {
                self.screen = Screen::Failed(error);
                Task::none()
            }
            Message::ProfileTab(message) => {
                let Screen::Profile(tab) = &mut self.screen else {
                    return Task::none();
                };

                match tab.update(message) {
                    profile_tab::Action::None => Task::none(),
                    profile_tab::Action::Run(task) => task.map(Message::ProfileTab),
                    profile_tab::Action::Edit => {
                        if let Some(page) = &self.page {
                            let (form, task) = ProfileForm::new(
                                self.client.clone(),
                                &page.editor,
                                &page.genders,
                                &page.title_unlocks,
                            );
                            self.screen = Screen::Edit(form);
                            return task.map(Message::ProfileForm);
                        }

                        Task::none()
                    }
                    profile_tab::Action::OpenUrl(url) => {
                        self.open_url(&url);
                        Task::none()
                    }
                }
            }
            Message::ProfileForm(message) => {
                let Screen::Edit(form) = &mut self.screen else {
                    return Task::none();
                };

                match form.update(message) {
                    profile_form::Action::None => Task::none(),
                    profile_form::Action::Run(task) => task.map(Message::ProfileForm),
                    profile_form::Action::Back => {
                        // Backing out without saving; the page we already
                        // have is still current
                        match &self.page {
                            Some(page) => {
                                let (tab, task) = Tab::new(&self.client, page);
                                self.screen = Screen::Profile(tab);
                                task.map(Message::ProfileTab)
                            }
                            None => {
                                self.screen = Screen::Loading;
                                Task::none()
                            }
                        }
                    }
                    profile_form::Action::Saved { editor_id } => {
                        // Navigation after a successful save: back to the
                        // profile screen with fresh server state
                        self.screen = Screen::Loading;
                        load_page(self.client.clone(), editor_id)
                    }
                }
            }
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Loading => center(text("Loading...")).into(),
            Screen::Failed(error) => {
                center(column![text("Couldn't load profile"), text(error)].spacing(8)).into()
            }
            Screen::Profile(tab) => match &self.page {
                Some(page) => tab.view(page, self.viewer.as_ref()).map(Message::ProfileTab),
                None => center(text("Loading...")).into(),
            },
            Screen::Edit(form) => form.view().map(Message::ProfileForm),
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Open a link in the system browser. Server-relative paths resolve
    /// against the configured base URL.
    fn open_url(&self, url: &str) {
        let url = if url.starts_with('/') {
            format!("{}{url}", self.base_url)
        } else {
            url.to_owned()
        };

        if let Err(err) = open::that_detached(&url) {
            warn!("failed to open {url}: {err}");
        }
    }
}

fn load_page(client: ApiClient, editor_id: i64) -> Task<Message> {
    Task::perform(
        async move {
            client
                .fetch_profile_page(editor_id)
                .await
                .map_err(|err| err.to_string())
        },
        Message::PageLoaded,
    )
}
