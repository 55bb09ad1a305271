use std::path::PathBuf;

use super::Tool;
use crate::config::Settings;
use crate::error::Error;
use crate::menu::builder::{self, MenuContext};
use crate::menu::{self, Format};
use crate::runner::Exec;
use crate::stack;

/// Render mode: query the engine and print the whole menu.
pub struct MenuTool {
    settings: Settings,
    ctx: MenuContext,
    format: Format,
}

impl MenuTool {
    pub fn new(settings: Settings, plugin: PathBuf, format: Format) -> Self {
        let ctx = MenuContext::new(plugin, &settings);
        Self {
            settings,
            ctx,
            format,
        }
    }
}

impl Tool for MenuTool {
    fn run(&self, exec: &dyn Exec) -> Result<String, Error> {
        let rows = stack::fetch_rows(exec, &self.settings);
        let entries = builder::build(&rows, &self.ctx);
        Ok(menu::serialize(&entries, self.format)?)
    }
}
