//! Headless note form controller.
//!
//! `NoteForm` holds the editable state of one mounted form: title, body, and
//! the locally selected tags. Its outward effects go through a
//! [`NoteFormHost`], which the UI layer implements on top of its callbacks
//! and navigation.

use crate::config::FormSettings;
use crate::models::{NoteData, Tag, TagOption};
use crate::{Error, Result};

/// Effects the note form performs on the application hosting it.
pub trait NoteFormHost {
    /// Register a tag the user just created inline.
    fn add_tag(&mut self, tag: Tag);

    /// Persist or update the submitted note.
    fn submit(&mut self, data: NoteData);

    /// Leave the form for the parent view.
    fn navigate_up(&mut self);
}

/// Editable state of a note form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteForm {
    available_tags: Vec<Tag>,
    title: String,
    markdown: String,
    selected_tags: Vec<Tag>,
    settings: FormSettings,
}

impl NoteForm {
    /// Create a form pre-populated from `initial`.
    ///
    /// Pass `NoteData::default()` for a blank create form.
    #[must_use]
    pub fn new(available_tags: Vec<Tag>, initial: NoteData, settings: FormSettings) -> Self {
        Self {
            available_tags,
            title: initial.title,
            markdown: initial.markdown,
            selected_tags: initial.tags,
            settings,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    #[must_use]
    pub fn selected_tags(&self) -> &[Tag] {
        &self.selected_tags
    }

    #[must_use]
    pub fn available_tags(&self) -> &[Tag] {
        &self.available_tags
    }

    #[must_use]
    pub const fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_markdown(&mut self, markdown: impl Into<String>) {
        self.markdown = markdown.into();
    }

    /// Refresh the option list when the host's tag set changes.
    ///
    /// The local selection is left alone.
    pub fn set_available_tags(&mut self, tags: Vec<Tag>) {
        self.available_tags = tags;
    }

    /// Options offered by the tag picker
    #[must_use]
    pub fn options(&self) -> Vec<TagOption> {
        self.available_tags.iter().map(Tag::to_option).collect()
    }

    /// Options currently shown as selected in the tag picker
    #[must_use]
    pub fn selected_options(&self) -> Vec<TagOption> {
        self.selected_tags.iter().map(Tag::to_option).collect()
    }

    /// Apply a picker change event carrying the full new selection.
    ///
    /// The previous selection is replaced, not merged.
    pub fn change_selection(&mut self, options: Vec<TagOption>) {
        let color = &self.settings.new_tag_color;
        self.selected_tags = options
            .into_iter()
            .map(|option| option.into_tag(color))
            .collect();
        tracing::debug!("Tag selection changed: {} selected", self.selected_tags.len());
    }

    /// Create a tag from a label typed into the picker.
    ///
    /// The host is told about the tag before it joins the local selection.
    /// Labels are not validated.
    pub fn create_tag(&mut self, label: impl Into<String>, host: &mut impl NoteFormHost) -> Tag {
        let tag = Tag::new(label, self.settings.new_tag_color.as_str());
        tracing::debug!("Creating tag {:?} ({})", tag.label, tag.id);
        host.add_tag(tag.clone());
        self.selected_tags.push(tag.clone());
        tag
    }

    /// Assemble the note from current field state without any effects.
    pub fn note_data(&self) -> Result<NoteData> {
        if self.title.is_empty() {
            return Err(Error::MissingField("title"));
        }
        if self.markdown.is_empty() {
            return Err(Error::MissingField("markdown"));
        }

        Ok(NoteData {
            title: self.title.clone(),
            markdown: self.markdown.clone(),
            tags: self.selected_tags.clone(),
        })
    }

    /// Submit the form: hand the note to the host, then navigate up.
    ///
    /// Navigation does not depend on what the host does with the note. When a
    /// required field is empty nothing is submitted and the form stays put.
    pub fn submit(&self, host: &mut impl NoteFormHost) -> Result<NoteData> {
        let data = self.note_data()?;
        tracing::info!(
            "Submitting note {:?} with {} tag(s)",
            data.title,
            data.tags.len()
        );
        host.submit(data.clone());
        host.navigate_up();
        Ok(data)
    }

    /// Leave without submitting. Unsaved edits are dropped.
    pub fn cancel(&self, host: &mut impl NoteFormHost) {
        tracing::info!("Note form cancelled");
        host.navigate_up();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::TagId;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum HostEvent {
        AddTag(Tag),
        Submit(NoteData),
        NavigateUp,
    }

    #[derive(Default)]
    struct RecordingHost {
        events: Vec<HostEvent>,
    }

    impl RecordingHost {
        fn submits(&self) -> Vec<&NoteData> {
            self.events
                .iter()
                .filter_map(|event| match event {
                    HostEvent::Submit(data) => Some(data),
                    _ => None,
                })
                .collect()
        }

        fn added_tags(&self) -> Vec<&Tag> {
            self.events
                .iter()
                .filter_map(|event| match event {
                    HostEvent::AddTag(tag) => Some(tag),
                    _ => None,
                })
                .collect()
        }
    }

    impl NoteFormHost for RecordingHost {
        fn add_tag(&mut self, tag: Tag) {
            self.events.push(HostEvent::AddTag(tag));
        }

        fn submit(&mut self, data: NoteData) {
            self.events.push(HostEvent::Submit(data));
        }

        fn navigate_up(&mut self) {
            self.events.push(HostEvent::NavigateUp);
        }
    }

    fn tag(id: &str, label: &str, color: &str) -> Tag {
        Tag {
            id: TagId::from(id),
            label: label.to_string(),
            color: color.to_string(),
        }
    }

    fn available() -> Vec<Tag> {
        vec![tag("t1", "home", "blue"), tag("t2", "work", "blue")]
    }

    fn blank_form() -> NoteForm {
        NoteForm::new(available(), NoteData::default(), FormSettings::default())
    }

    #[test]
    fn blank_form_has_empty_fields() {
        let form = blank_form();
        assert_eq!(form.title(), "");
        assert_eq!(form.markdown(), "");
        assert!(form.selected_tags().is_empty());
        assert!(form.selected_options().is_empty());
    }

    #[test]
    fn edit_form_is_prepopulated() {
        let form = NoteForm::new(
            available(),
            NoteData {
                title: "Groceries".to_string(),
                markdown: "- milk\n- eggs".to_string(),
                tags: vec![tag("t1", "home", "blue")],
            },
            FormSettings::default(),
        );
        assert_eq!(form.title(), "Groceries");
        assert_eq!(form.markdown(), "- milk\n- eggs");
        assert_eq!(form.selected_tags(), &[tag("t1", "home", "blue")]);
        assert_eq!(form.selected_options(), vec![TagOption::new("home", "t1")]);
    }

    #[test]
    fn options_mirror_available_tags() {
        assert_eq!(
            blank_form().options(),
            vec![TagOption::new("home", "t1"), TagOption::new("work", "t2")]
        );
    }

    #[test]
    fn submit_assembles_note_then_navigates() {
        let mut form = blank_form();
        let mut host = RecordingHost::default();
        form.set_title("Trip");
        form.set_markdown("Pack bags");
        form.change_selection(vec![TagOption::new("home", "t1")]);

        let data = form.submit(&mut host).unwrap();

        let expected = NoteData {
            title: "Trip".to_string(),
            markdown: "Pack bags".to_string(),
            tags: vec![tag("t1", "home", "blue")],
        };
        assert_eq!(data, expected);
        assert_eq!(
            host.events,
            vec![HostEvent::Submit(expected), HostEvent::NavigateUp]
        );
    }

    #[test]
    fn creating_a_tag_reports_it_and_selects_it() {
        let mut form = blank_form();
        let mut host = RecordingHost::default();

        let created = form.create_tag("urgent", &mut host);

        assert_eq!(created.label, "urgent");
        assert_eq!(created.color, "blue");
        assert!(!available().iter().any(|tag| tag.id == created.id));
        assert_eq!(host.added_tags(), vec![&created]);
        assert_eq!(form.selected_tags(), &[created]);
    }

    #[test]
    fn created_tags_get_fresh_ids() {
        let mut form = blank_form();
        let mut host = RecordingHost::default();
        let first = form.create_tag("urgent", &mut host);
        let second = form.create_tag("urgent", &mut host);
        assert_ne!(first.id, second.id);
        assert_eq!(form.selected_tags().len(), 2);
    }

    #[test]
    fn created_tag_is_appended_to_existing_selection() {
        let mut form = blank_form();
        let mut host = RecordingHost::default();
        form.change_selection(vec![TagOption::new("home", "t1")]);

        let created = form.create_tag("urgent", &mut host);

        assert_eq!(
            form.selected_tags(),
            &[tag("t1", "home", "blue"), created]
        );
    }

    #[test]
    fn created_tag_is_submitted_after_being_reported() {
        let mut form = blank_form();
        let mut host = RecordingHost::default();
        form.set_title("Trip");
        form.set_markdown("Pack bags");
        let created = form.create_tag("urgent", &mut host);

        form.submit(&mut host).unwrap();

        assert_eq!(host.events.len(), 3);
        assert_eq!(host.events[0], HostEvent::AddTag(created.clone()));
        assert_eq!(host.submits()[0].tags, vec![created]);
        assert_eq!(host.events[2], HostEvent::NavigateUp);
    }

    #[test]
    fn empty_title_blocks_submit() {
        let mut form = blank_form();
        let mut host = RecordingHost::default();
        form.set_markdown("Pack bags");

        assert_eq!(form.submit(&mut host), Err(Error::MissingField("title")));
        assert!(host.events.is_empty());
    }

    #[test]
    fn empty_body_blocks_submit() {
        let mut form = blank_form();
        let mut host = RecordingHost::default();
        form.set_title("Trip");

        assert_eq!(form.submit(&mut host), Err(Error::MissingField("markdown")));
        assert!(host.events.is_empty());
    }

    #[test]
    fn cancel_never_submits() {
        let mut form = blank_form();
        let mut host = RecordingHost::default();
        form.set_title("Trip");
        form.set_markdown("Pack bags");
        form.change_selection(vec![TagOption::new("home", "t1")]);

        form.cancel(&mut host);

        assert_eq!(host.events, vec![HostEvent::NavigateUp]);
    }

    #[test]
    fn change_event_replaces_selection_wholesale() {
        let mut form = NoteForm::new(
            available(),
            NoteData {
                tags: available(),
                ..NoteData::default()
            },
            FormSettings::default(),
        );
        assert_eq!(form.selected_tags().len(), 2);

        form.change_selection(vec![TagOption::new("work", "t2")]);

        assert_eq!(form.selected_tags(), &[tag("t2", "work", "blue")]);
    }

    #[test]
    fn change_event_recolors_with_placeholder() {
        let settings = FormSettings {
            new_tag_color: "teal".to_string(),
            ..FormSettings::default()
        };
        let mut form = NoteForm::new(
            vec![tag("t1", "home", "red")],
            NoteData::default(),
            settings,
        );
        form.change_selection(vec![TagOption::new("home", "t1")]);
        assert_eq!(form.selected_tags(), &[tag("t1", "home", "teal")]);
    }

    #[test]
    fn labels_are_not_validated() {
        let mut form = blank_form();
        let mut host = RecordingHost::default();
        form.create_tag("", &mut host);
        form.create_tag("home", &mut host);
        assert_eq!(host.added_tags().len(), 2);
        assert_eq!(form.selected_tags()[0].label, "");
        assert_eq!(form.selected_tags()[1].label, "home");
    }

    #[test]
    fn repeated_submits_are_not_debounced() {
        let mut form = blank_form();
        let mut host = RecordingHost::default();
        form.set_title("Trip");
        form.set_markdown("Pack bags");

        form.submit(&mut host).unwrap();
        form.submit(&mut host).unwrap();

        assert_eq!(host.submits().len(), 2);
    }

    #[test]
    fn refreshing_available_tags_keeps_selection() {
        let mut form = blank_form();
        let mut host = RecordingHost::default();
        let created = form.create_tag("urgent", &mut host);
        let mut tags = available();
        tags.push(created.clone());

        form.set_available_tags(tags);

        assert_eq!(form.options().len(), 3);
        assert_eq!(form.selected_tags(), &[created]);
    }
}
