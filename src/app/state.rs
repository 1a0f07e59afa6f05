//! Demo application state

use std::sync::mpsc::{self, Receiver, Sender};

use thiserror::Error;

use crate::model::{Icon, Image};
use crate::ui::components::{Button, ButtonStyle};
use crate::ui::symbols;
use crate::ui::views::PlaceholderView;

/// Ticks a simulated retry stays in the loading style (200ms each)
pub(crate) const RETRY_TICKS: u16 = 10;

/// Sample failures the demo can display
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoError {
    #[error("Network unreachable")]
    NetworkUnreachable,
}

/// Button taps forwarded from the placeholder callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DemoEvent {
    Retry,
    Dismiss,
}

/// The demo application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// The hosted placeholder
    pub placeholder: PlaceholderView,
    /// Feedback shown in the status bar
    pub message: Option<String>,
    /// Ticks spent in a simulated retry
    pub(crate) retry_ticks: Option<u16>,
    pub(crate) events: Receiver<DemoEvent>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}

impl App {
    /// Construct a new instance of [`App`], optionally with custom art.
    pub fn new(image: Option<Image>) -> Self {
        let (sender, events) = mpsc::channel();
        let image = image.unwrap_or_else(|| {
            Image::from_art(symbols::art::EMPTY_TRAY.trim_start_matches('\n'))
        });

        Self {
            running: true,
            placeholder: build_placeholder(image, sender),
            message: None,
            retry_ticks: None,
            events,
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

fn build_placeholder(image: Image, sender: Sender<DemoEvent>) -> PlaceholderView {
    let mut view = PlaceholderView::new();
    view.set_image(Some(image));
    view.set_title(Some("Your inbox is empty".to_string()));
    view.set_content(Some(
        "New messages will show up here. Check back later or refresh now.".to_string(),
    ));

    view.set_primary_button_title(Some("Retry".to_string()));
    view.set_primary_button_image(Some(Icon::from("↻")));
    let retry = sender.clone();
    view.set_primary_button_action(Some(Box::new(move |_: &Button| {
        // The receiver lives as long as the App that owns this view
        let _ = retry.send(DemoEvent::Retry);
    })));

    view.set_secondary_button_title(Some("Dismiss".to_string()));
    view.set_secondary_button_style(ButtonStyle::Bordered);
    view.set_secondary_button_action(Some(Box::new(move |_: &Button| {
        let _ = sender.send(DemoEvent::Dismiss);
    })));

    view
}
