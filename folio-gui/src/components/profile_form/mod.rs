use folio_lib::{
    ApiClient, ProfilePatch,
    editor::{Editor, Gender, TitleOption, TitleUnlock},
};
use iced::{
    Element, Length, Task, Theme,
    widget::{button, column, combo_box, container, row, space, text, text_editor, text_input},
};

use crate::components::profile_form::area_search::AreaSearch;

pub mod area_search;

#[derive(Debug, Clone)]
pub enum Message {
    NameInput(String),
    BioEdited(text_editor::Action),
    TitleSelected(TitleOption),
    TitleCleared,
    GenderSelected(Gender),
    GenderCleared,
    AreaSearch(area_search::Message),
    BackPressed,
    SavePressed,
    Saved(Result<(), String>),
}

pub enum Action {
    None,
    Run(Task<Message>),
    Back,
    Saved { editor_id: i64 },
}

/// The editable subset as it was when the form opened. Dirtiness is always
/// measured against this, never against intermediate draft states.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    name: String,
    bio: String,
    area_id: Option<i64>,
    gender_id: Option<i64>,
    title_unlock_id: Option<i64>,
}

/// Form for editing the signed-in editor's public profile.
///
/// Owns a local draft of the editable fields; the [`Editor`] it was built
/// from is never written through. Saving posts the whole draft at once and
/// reports [`Action::Saved`] so the container can navigate.
pub struct ProfileForm {
    client: ApiClient,
    editor_id: i64,
    snapshot: Snapshot,

    // Draft
    name: String,
    bio: String,
    gender: Option<Gender>,
    title: Option<TitleOption>,
    waiting: bool,
    error: Option<String>,

    // Widget state
    bio_content: text_editor::Content,
    gender_options: combo_box::State<Gender>,
    title_options: combo_box::State<TitleOption>,
    has_titles: bool,

    // Children
    area_search: AreaSearch,
}

impl ProfileForm {
    pub fn new(
        client: ApiClient,
        editor: &Editor,
        genders: &[Gender],
        title_unlocks: &[TitleUnlock],
    ) -> (Self, Task<Message>) {
        // Fresh copies merging each unlock's id with its title's label, so
        // the shared unlock list is never written through.
        let title_options = TitleOption::from_unlocks(title_unlocks);

        let snapshot = Snapshot {
            name: editor.name.clone(),
            bio: editor.bio.clone(),
            area_id: editor.area.as_ref().map(|area| area.id),
            gender_id: editor.gender.as_ref().map(|gender| gender.id),
            title_unlock_id: editor.title_unlock_id,
        };

        let title = editor.title_unlock_id.and_then(|unlock_id| {
            title_options
                .iter()
                .find(|option| option.unlock_id == unlock_id)
                .cloned()
        });

        (
            Self {
                area_search: AreaSearch::new(client.clone(), editor.area.clone()),
                client,
                editor_id: editor.id,
                snapshot,

                name: editor.name.clone(),
                bio: editor.bio.clone(),
                gender: editor.gender.clone(),
                title,
                waiting: false,
                error: None,

                bio_content: text_editor::Content::with_text(&editor.bio),
                gender_options: combo_box::State::new(genders.to_vec()),
                has_titles: !title_options.is_empty(),
                title_options: combo_box::State::new(title_options),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NameInput(content) => {
                self.name = content;
                Action::None
            }
            Message::BioEdited(action) => {
                self.bio_content.perform(action);
                self.bio = self.bio_content.text();
                Action::None
            }
            Message::TitleSelected(option) => {
                self.title = Some(option);
                Action::None
            }
            Message::TitleCleared => {
                self.title = None;
                Action::None
            }
            Message::GenderSelected(gender) => {
                self.gender = Some(gender);
                Action::None
            }
            Message::GenderCleared => {
                self.gender = None;
                Action::None
            }
            Message::AreaSearch(message) => match self.area_search.update(message) {
                area_search::Action::None => Action::None,
                area_search::Action::Run(task) => Action::Run(task.map(Message::AreaSearch)),
            },
            Message::BackPressed => Action::Back,
            Message::SavePressed => {
                // One submission in flight at a time; nothing goes out for a
                // clean or invalid draft.
                if self.waiting || !self.validate() || !self.is_dirty() {
                    return Action::None;
                }

                self.waiting = true;
                self.error = None;

                let client = self.client.clone();
                let patch = self.patch();

                Action::Run(Task::perform(
                    async move {
                        client
                            .submit_profile(patch)
                            .await
                            .map_err(|err| err.to_string())
                    },
                    Message::Saved,
                ))
            }
            Message::Saved(Ok(())) => Action::Saved {
                editor_id: self.editor_id,
            },
            Message::Saved(Err(message)) => {
                // The draft stays as-is so the user can correct and resubmit.
                self.waiting = false;
                self.error = Some(message);
                Action::None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let name_hint = if self.validate() {
            text("required").size(12)
        } else {
            text("required").size(12).style(text::danger)
        };

        let mut content = column![
            text("Edit your public profile").size(24),
            column![
                row![text("Display Name"), name_hint].spacing(8),
                text_input("Display name...", &self.name).on_input(Message::NameInput),
            ]
            .spacing(4),
            column![
                text("Bio"),
                text_editor(&self.bio_content)
                    .placeholder("...")
                    .on_action(Message::BioEdited),
            ]
            .spacing(4),
        ]
        .spacing(12);

        // No point offering a title select to someone with nothing unlocked
        if self.has_titles {
            content = content.push(
                column![
                    text("Title"),
                    row![
                        combo_box(
                            &self.title_options,
                            "Select title",
                            self.title.as_ref(),
                            Message::TitleSelected,
                        ),
                        button(text("Clear")).style(button::text).on_press_maybe(
                            self.title.is_some().then_some(Message::TitleCleared)
                        ),
                    ]
                    .spacing(8),
                ]
                .spacing(4),
            );
        }

        content = content
            .push(self.area_search.view().map(Message::AreaSearch))
            .push(
                column![
                    text("Gender"),
                    row![
                        combo_box(
                            &self.gender_options,
                            "Select Gender",
                            self.gender.as_ref(),
                            Message::GenderSelected,
                        ),
                        button(text("Clear")).style(button::text).on_press_maybe(
                            self.gender.is_some().then_some(Message::GenderCleared)
                        ),
                    ]
                    .spacing(8),
                ]
                .spacing(4),
            );

        if let Some(error) = &self.error {
            content = content.push(
                container(text(error))
                    .padding(10)
                    .width(Length::Fill)
                    .style(|theme: &Theme| {
                        let palette = theme.extended_palette();
                        container::Style {
                            background: Some(palette.danger.weak.color.into()),
                            text_color: Some(palette.danger.weak.text),
                            ..container::Style::default()
                        }
                    }),
            );
        }

        content = content.push(
            row![
                button(text("Back"))
                    .style(button::secondary)
                    .on_press(Message::BackPressed),
                space::horizontal(),
                button(text(if self.waiting {
                    "Saving..."
                } else {
                    "Save changes"
                }))
                .style(button::success)
                .on_press_maybe(self.can_save().then_some(Message::SavePressed)),
            ]
            .spacing(8),
        );

        container(content).padding(20).max_width(640).into()
    }

    fn can_save(&self) -> bool {
        !self.waiting && self.validate() && self.is_dirty()
    }

    /// The one structural rule: a trimmed name must be non-empty. Every
    /// other field is genuinely optional.
    fn validate(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Field-wise comparison against the snapshot; area and gender compare
    /// by id, name and bio by trimmed text.
    fn is_dirty(&self) -> bool {
        self.name.trim() != self.snapshot.name.trim()
            || self.bio.trim() != self.snapshot.bio.trim()
            || self.area_search.selected().map(|area| area.id) != self.snapshot.area_id
            || self.gender.as_ref().map(|gender| gender.id) != self.snapshot.gender_id
            || self.title.as_ref().map(|option| option.unlock_id) != self.snapshot.title_unlock_id
    }

    /// The outgoing patch, built atomically from the whole current draft.
    fn patch(&self) -> ProfilePatch {
        ProfilePatch {
            id: self.editor_id,
            name: self.name.trim().to_owned(),
            bio: self.bio.trim().to_owned(),
            area_id: self.area_search.selected().map(|area| area.id),
            gender_id: self.gender.as_ref().map(|gender| gender.id),
            title: self.title.as_ref().map(|option| option.unlock_id),
        }
    }
}
