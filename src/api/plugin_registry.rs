use crate::error::{OrgChartError, OrgChartResult};
use crate::extensions::{OrgChartEvent, OrgChartPlugin, PluginContext};
use crate::render::Renderer;

use super::OrgChart;

impl<R: Renderer> OrgChart<R> {
    /// Registers a plugin with a unique, non-empty id.
    pub fn register_plugin(&mut self, plugin: Box<dyn OrgChartPlugin>) -> OrgChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(OrgChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(OrgChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.id() != plugin_id);
        self.plugins.len() != before
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.viewport,
            zoom: self.transform.zoom(),
            offset: self.transform.offset(),
            tree_node_count: self.tree.len(),
            collapsed_count: self.collapsed.len(),
            interaction_mode: self.interaction.mode(),
        }
    }

    pub(super) fn emit_event(&mut self, event: OrgChartEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(&event, context);
        }
    }
}
