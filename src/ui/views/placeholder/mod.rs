//! Placeholder View
//!
//! Loading / error / empty state screen: an optional image, a spinner, a
//! title, body text and up to two buttons, stacked vertically inside a
//! scroll container that centers content smaller than the viewport.
//!
//! Every setter applies its change immediately: the value is pushed into the
//! owned element and the visibility pass in `state` runs again. Visibility is
//! always derived from the current style and content, never set directly.

mod input;
mod render;
mod state;


pub use input::PlaceholderAction;

use std::error::Error;
use std::fmt;

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::Text,
};

use crate::model::{Icon, Image, PlaceholderStyle};
use crate::ui::components::{
    Button, ButtonAction, ButtonRole, ButtonStyle, Element, ImageView, Label, Spinner,
};
use crate::ui::layout::{CenteringScroll, StackLayout};
use crate::ui::theme;

/// Host-supplied failure shown by the error style
pub type PlaceholderFailure = Box<dyn Error + Send + Sync>;

/// Identifies an element arranged in the placeholder stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Image,
    Spinner,
    Title,
    Content,
    PrimaryButton,
    SecondaryButton,
    /// Element inserted by the host
    Custom(usize),
}

impl From<ButtonRole> for ElementId {
    fn from(role: ButtonRole) -> Self {
        match role {
            ButtonRole::Primary => Self::PrimaryButton,
            ButtonRole::Secondary => Self::SecondaryButton,
        }
    }
}

/// Built-in elements in their initial order
const DEFAULT_ORDER: [ElementId; 6] = [
    ElementId::Image,
    ElementId::Spinner,
    ElementId::Title,
    ElementId::Content,
    ElementId::PrimaryButton,
    ElementId::SecondaryButton,
];

/// Placeholder view state
pub struct PlaceholderView {
    style: Option<PlaceholderStyle>,
    error: Option<PlaceholderFailure>,
    is_loading: bool,
    title: Option<String>,
    attributed_title: Option<Text<'static>>,
    content: Option<String>,
    attributed_content: Option<Text<'static>>,
    image_view: ImageView,
    spinner: Spinner,
    title_label: Label,
    content_label: Label,
    primary_button: Button,
    secondary_button: Button,
    /// Host-inserted elements
    custom: Vec<(ElementId, Box<dyn Element>)>,
    next_custom_id: usize,
    stack: StackLayout<ElementId>,
    scroll: CenteringScroll,
    /// Button that receives Enter / Space
    focus: Option<ButtonRole>,
}

impl fmt::Debug for PlaceholderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceholderView")
            .field("style", &self.style)
            .field("error", &self.error.as_ref().map(|e| e.to_string()))
            .field("is_loading", &self.is_loading)
            .field("arranged", &self.stack.arranged())
            .field("custom", &self.custom.len())
            .field("scroll", &self.scroll)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl Default for PlaceholderView {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderView {
    /// Create an empty placeholder with default styling
    pub fn new() -> Self {
        let mut view = Self {
            style: None,
            error: None,
            is_loading: false,
            title: None,
            attributed_title: None,
            content: None,
            attributed_content: None,
            image_view: ImageView::new(),
            spinner: Spinner::new(),
            title_label: Label::new(theme::text::TITLE_FONT),
            content_label: Label::new(theme::text::CONTENT_FONT),
            primary_button: Button::new(ButtonStyle::Solid),
            secondary_button: Button::new(ButtonStyle::Transparent),
            custom: Vec::new(),
            next_custom_id: 0,
            stack: StackLayout::new(DEFAULT_ORDER.to_vec()),
            scroll: CenteringScroll::new(),
            focus: None,
        };
        view.update_visibility();
        view
    }

    // =========================================================================
    // Style and state
    // =========================================================================

    pub fn style(&self) -> Option<PlaceholderStyle> {
        self.style
    }

    /// Switch the display mode; re-entering the current style re-applies it
    pub fn set_style(&mut self, style: Option<PlaceholderStyle>) {
        if self.style != style {
            tracing::debug!(from = ?self.style, to = ?style, "placeholder style changed");
        }
        self.style = style;
        self.update_visibility();
    }

    /// The recorded failure, if any
    pub fn error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.error.as_deref()
    }

    /// Text shown for the recorded failure
    pub fn error_description(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    /// Record a failure and switch to the error style
    pub fn set_error(&mut self, error: impl Into<PlaceholderFailure>) {
        let error = error.into();
        tracing::debug!(error = %error, "placeholder error recorded");
        self.error = Some(error);
        self.set_style(Some(PlaceholderStyle::Error));
    }

    /// Forget the recorded failure; the style is left as it is
    pub fn clear_error(&mut self) {
        self.error = None;
        self.update_visibility();
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Start or stop the spinner independently of the style
    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
        self.update_visibility();
    }

    pub fn is_centered(&self) -> bool {
        self.scroll.is_centered()
    }

    /// Center content smaller than the viewport
    pub fn set_centered(&mut self, is_centered: bool) {
        self.scroll.set_centered(is_centered);
    }

    // =========================================================================
    // Image and spinner
    // =========================================================================

    pub fn image(&self) -> Option<&Image> {
        self.image_view.image.as_ref()
    }

    pub fn set_image(&mut self, image: Option<Image>) {
        self.image_view.image = image;
        self.update_visibility();
    }

    pub fn image_color(&self) -> Option<Color> {
        self.image_view.tint
    }

    pub fn set_image_color(&mut self, color: Option<Color>) {
        self.image_view.tint = color;
    }

    pub fn image_height_ratio(&self) -> f32 {
        self.image_view.height_ratio
    }

    /// Image height as a fraction of the stack width
    pub fn set_image_height_ratio(&mut self, ratio: f32) {
        self.image_view.height_ratio = ratio;
    }

    pub fn loading_color(&self) -> Option<Color> {
        self.spinner.color
    }

    pub fn set_loading_color(&mut self, color: Option<Color>) {
        self.spinner.color = color;
    }

    // =========================================================================
    // Title
    // =========================================================================

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
        self.update_visibility();
    }

    pub fn attributed_title(&self) -> Option<&Text<'static>> {
        self.attributed_title.as_ref()
    }

    pub fn set_attributed_title(&mut self, title: Option<Text<'static>>) {
        self.attributed_title = title;
        self.update_visibility();
    }

    pub fn title_font(&self) -> Style {
        self.title_label.font
    }

    pub fn set_title_font(&mut self, font: Style) {
        self.title_label.font = font;
    }

    pub fn title_color(&self) -> Color {
        self.title_label.color
    }

    pub fn set_title_color(&mut self, color: Color) {
        self.title_label.color = color;
    }

    pub fn title_alignment(&self) -> Alignment {
        self.title_label.alignment
    }

    pub fn set_title_alignment(&mut self, alignment: Alignment) {
        self.title_label.alignment = alignment;
    }

    // =========================================================================
    // Body
    // =========================================================================

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: Option<String>) {
        self.content = content;
        self.update_visibility();
    }

    pub fn attributed_content(&self) -> Option<&Text<'static>> {
        self.attributed_content.as_ref()
    }

    pub fn set_attributed_content(&mut self, content: Option<Text<'static>>) {
        self.attributed_content = content;
        self.update_visibility();
    }

    pub fn content_font(&self) -> Style {
        self.content_label.font
    }

    pub fn set_content_font(&mut self, font: Style) {
        self.content_label.font = font;
    }

    pub fn content_color(&self) -> Color {
        self.content_label.color
    }

    pub fn set_content_color(&mut self, color: Color) {
        self.content_label.color = color;
    }

    pub fn content_alignment(&self) -> Alignment {
        self.content_label.alignment
    }

    pub fn set_content_alignment(&mut self, alignment: Alignment) {
        self.content_label.alignment = alignment;
    }

    /// Characters the body label currently shows
    pub fn body_text(&self) -> Option<String> {
        self.content_label.text()
    }

    // =========================================================================
    // Buttons
    // =========================================================================

    pub fn button(&self, role: ButtonRole) -> &Button {
        match role {
            ButtonRole::Primary => &self.primary_button,
            ButtonRole::Secondary => &self.secondary_button,
        }
    }

    fn button_mut(&mut self, role: ButtonRole) -> &mut Button {
        match role {
            ButtonRole::Primary => &mut self.primary_button,
            ButtonRole::Secondary => &mut self.secondary_button,
        }
    }

    pub fn set_button_style(&mut self, role: ButtonRole, style: ButtonStyle) {
        self.button_mut(role).style = style;
    }

    pub fn set_button_tint_color(&mut self, role: ButtonRole, color: Option<Color>) {
        self.button_mut(role).tint = color;
    }

    pub fn set_button_title(&mut self, role: ButtonRole, title: Option<String>) {
        self.button_mut(role).title = title;
        self.update_visibility();
    }

    pub fn set_button_image(&mut self, role: ButtonRole, image: Option<Icon>) {
        self.button_mut(role).image = image;
        self.update_visibility();
    }

    pub fn set_button_action(&mut self, role: ButtonRole, action: Option<ButtonAction>) {
        self.button_mut(role).set_action(action);
    }

    pub fn primary_button(&self) -> &Button {
        &self.primary_button
    }

    pub fn set_primary_button_style(&mut self, style: ButtonStyle) {
        self.set_button_style(ButtonRole::Primary, style);
    }

    pub fn set_primary_button_tint_color(&mut self, color: Option<Color>) {
        self.set_button_tint_color(ButtonRole::Primary, color);
    }

    pub fn set_primary_button_title(&mut self, title: Option<String>) {
        self.set_button_title(ButtonRole::Primary, title);
    }

    pub fn set_primary_button_image(&mut self, image: Option<Icon>) {
        self.set_button_image(ButtonRole::Primary, image);
    }

    pub fn set_primary_button_action(&mut self, action: Option<ButtonAction>) {
        self.set_button_action(ButtonRole::Primary, action);
    }

    pub fn secondary_button(&self) -> &Button {
        &self.secondary_button
    }

    pub fn set_secondary_button_style(&mut self, style: ButtonStyle) {
        self.set_button_style(ButtonRole::Secondary, style);
    }

    pub fn set_secondary_button_tint_color(&mut self, color: Option<Color>) {
        self.set_button_tint_color(ButtonRole::Secondary, color);
    }

    pub fn set_secondary_button_title(&mut self, title: Option<String>) {
        self.set_button_title(ButtonRole::Secondary, title);
    }

    pub fn set_secondary_button_image(&mut self, image: Option<Icon>) {
        self.set_button_image(ButtonRole::Secondary, image);
    }

    pub fn set_secondary_button_action(&mut self, action: Option<ButtonAction>) {
        self.set_button_action(ButtonRole::Secondary, action);
    }

    /// Tap a button as if the user activated it
    ///
    /// Returns true when a callback ran. Hidden buttons ignore taps.
    pub fn tap(&mut self, role: ButtonRole) -> bool {
        let delivered = self.button_mut(role).tap();
        tracing::debug!(button = role.label(), delivered, "placeholder button tapped");
        delivered
    }

    // =========================================================================
    // Stack
    // =========================================================================

    pub fn spacing(&self) -> u16 {
        self.stack.spacing()
    }

    /// Default gap between elements, in rows
    pub fn set_spacing(&mut self, spacing: u16) {
        self.stack.set_spacing(spacing);
    }

    /// Override the gap after one element. No-op if it is not arranged.
    pub fn set_spacing_after(&mut self, spacing: u16, after: ElementId) {
        self.stack.set_spacing_after(spacing, &after);
    }

    /// Override the gap before one element. No-op on the first element.
    pub fn set_spacing_before(&mut self, spacing: u16, before: ElementId) {
        self.stack.set_spacing_before(spacing, &before);
    }

    /// Arranged elements in display order
    pub fn arranged(&self) -> &[ElementId] {
        self.stack.arranged()
    }

    /// Insert a host element right after `after`
    ///
    /// Returns `None` (and drops the element) when `after` is not arranged.
    pub fn insert_after(
        &mut self,
        element: impl Element + 'static,
        after: ElementId,
    ) -> Option<ElementId> {
        let id = self.next_id();
        self.stack
            .insert_after(id, &after)
            .then(|| self.adopt(id, element))
    }

    /// Insert a host element right before `before`
    ///
    /// Returns `None` (and drops the element) when `before` is not arranged
    /// or is the first element.
    pub fn insert_before(
        &mut self,
        element: impl Element + 'static,
        before: ElementId,
    ) -> Option<ElementId> {
        let id = self.next_id();
        self.stack
            .insert_before(id, &before)
            .then(|| self.adopt(id, element))
    }

    /// Insert a host element at the top of the stack
    pub fn prepend(&mut self, element: impl Element + 'static) -> ElementId {
        let id = self.next_id();
        self.stack.prepend(id);
        self.adopt(id, element)
    }

    /// Insert a host element at the bottom of the stack
    pub fn append(&mut self, element: impl Element + 'static) -> ElementId {
        let id = self.next_id();
        self.stack.append(id);
        self.adopt(id, element)
    }

    fn next_id(&self) -> ElementId {
        ElementId::Custom(self.next_custom_id)
    }

    fn adopt(&mut self, id: ElementId, element: impl Element + 'static) -> ElementId {
        self.next_custom_id += 1;
        self.custom.push((id, Box::new(element)));
        id
    }

    /// Element behind an id
    pub fn element(&self, id: ElementId) -> Option<&dyn Element> {
        let element: &dyn Element = match id {
            ElementId::Image => &self.image_view,
            ElementId::Spinner => &self.spinner,
            ElementId::Title => &self.title_label,
            ElementId::Content => &self.content_label,
            ElementId::PrimaryButton => &self.primary_button,
            ElementId::SecondaryButton => &self.secondary_button,
            ElementId::Custom(_) => {
                return self
                    .custom
                    .iter()
                    .find(|(custom_id, _)| *custom_id == id)
                    .map(|(_, element)| element.as_ref());
            }
        };
        Some(element)
    }

    /// Whether an element currently takes part in the layout
    pub fn is_visible(&self, id: ElementId) -> bool {
        self.element(id).is_some_and(|element| !element.is_hidden())
    }

    pub fn image_view(&self) -> &ImageView {
        &self.image_view
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn title_label(&self) -> &Label {
        &self.title_label
    }

    pub fn content_label(&self) -> &Label {
        &self.content_label
    }

    /// Scroll geometry as of the last render
    pub fn scroll(&self) -> &CenteringScroll {
        &self.scroll
    }

    /// Advance the spinner animation one frame
    pub fn tick(&mut self) {
        self.spinner.tick();
    }
}
