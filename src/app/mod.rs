// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// COSMIC application wiring and main app struct.

pub mod message;
pub mod model;
pub mod update;
pub mod view;

pub use message::AppMessage;
pub use model::AppModel;

use cosmic::app::Core;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::{Action, ApplicationExt, Element, Task};

use crate::Args;
use crate::config::AppConfig;
use crate::domain::view::WheelDirection;
use crate::fl;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Main application type.
pub struct VellumApp {
    core: Core,
    pub model: AppModel,
    pub config: AppConfig,
    config_handler: Option<cosmic_config::Config>,
}

impl cosmic::Application for VellumApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "org.example.Vellum";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        // Load persisted config.
        let (config, config_handler) =
            match cosmic_config::Config::new(Self::APP_ID, AppConfig::VERSION) {
                Ok(handler) => {
                    let config = AppConfig::get_entry(&handler).unwrap_or_default();
                    (config, Some(handler))
                }
                Err(e) => {
                    log::warn!("Config unavailable, using defaults: {e}");
                    (AppConfig::default(), None)
                }
            };

        let Flags::Args(args) = flags;

        let model = AppModel::new(config.initial_zoom);
        let mut app = Self {
            core,
            model,
            config,
            config_handler,
        };

        app.set_header_title(fl!("app-title"));

        // Open the file given on the command line, if any.
        if let Some(path) = args.file {
            if update::open_path(&mut app, &path).is_needed() {
                app.model.refresh_display();
            }
        }

        (app, Task::none())
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        match update::update(self, &message) {
            update::UpdateResult::None => Task::none(),
            update::UpdateResult::Task(task) => task,
        }
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        view::header::start(&self.model)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::canvas::view(&self.model)
    }

    fn footer(&self) -> Option<Element<'_, Self::Message>> {
        Some(view::footer::view(&self.model))
    }

    fn dialog(&self) -> Option<Element<'_, Self::Message>> {
        view::dialog::view(&self.model)
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        keyboard::on_key_press(handle_key_press)
    }
}

impl VellumApp {
    /// Save current config to disk.
    pub fn save_config(&self) {
        if let Some(ref handler) = self.config_handler {
            if let Err(e) = self.config.write_entry(handler) {
                log::warn!("Failed to save config: {e}");
            }
        }
    }

    /// Show the open file's name in the header bar.
    pub fn update_title(&mut self) {
        let title = match self.model.controller.document() {
            Some(doc) => format!("{} - {}", doc.file_name(), fl!("app-title")),
            None => fl!("app-title"),
        };
        self.set_header_title(title);
    }
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    use AppMessage::{Exit, NextPage, OpenFile, PrevPage, Rotate, SaveAnnotations, WheelZoom};

    if modifiers.control() && !modifiers.shift() && !modifiers.alt() && !modifiers.logo() {
        return match key.as_ref() {
            Key::Character(ch) if ch.eq_ignore_ascii_case("o") => Some(OpenFile),
            Key::Character(ch) if ch.eq_ignore_ascii_case("s") => Some(SaveAnnotations),
            Key::Character(ch) if ch.eq_ignore_ascii_case("q") => Some(Exit),
            _ => None,
        };
    }

    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowRight | Named::PageDown) => Some(NextPage),
        Key::Named(Named::ArrowLeft | Named::PageUp) => Some(PrevPage),
        Key::Character(ch) if ch.eq_ignore_ascii_case("r") => Some(Rotate),
        // Same step as one wheel notch.
        Key::Character("+" | "=") => Some(WheelZoom(WheelDirection::Up)),
        Key::Character("-") => Some(WheelZoom(WheelDirection::Down)),
        _ => None,
    }
}

/// Zoom shown next to the slider, in percent.
pub(crate) fn zoom_percent(zoom: f32) -> i32 {
    (zoom * 100.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::WHEEL_ZOOM_STEP;

    #[test]
    fn arrow_keys_navigate() {
        let none = Modifiers::empty();
        assert!(matches!(
            handle_key_press(Key::Named(Named::ArrowRight), none),
            Some(AppMessage::NextPage)
        ));
        assert!(matches!(
            handle_key_press(Key::Named(Named::ArrowLeft), none),
            Some(AppMessage::PrevPage)
        ));
    }

    #[test]
    fn ctrl_shortcuts() {
        assert!(matches!(
            handle_key_press(Key::Character("s".into()), Modifiers::CTRL),
            Some(AppMessage::SaveAnnotations)
        ));
        assert!(matches!(
            handle_key_press(Key::Character("o".into()), Modifiers::CTRL),
            Some(AppMessage::OpenFile)
        ));
        assert!(handle_key_press(Key::Character("r".into()), Modifiers::CTRL).is_none());
    }

    #[test]
    fn zoom_keys_use_wheel_step() {
        assert!(matches!(
            handle_key_press(Key::Character("+".into()), Modifiers::empty()),
            Some(AppMessage::WheelZoom(WheelDirection::Up))
        ));
        assert_eq!(zoom_percent(1.0 + WHEEL_ZOOM_STEP), 110);
    }
}
