use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::catalog::{CatalogApi, OrderStatusTool, SearchProductTool};
use crate::returns::{
    CalculateRefundTool, CheckReturnStatusTool, GenerateReturnLabelTool, InitiateReturnTool,
    SharedRng,
};
use crate::tool::DynTool;

/// A registry for managing the tools exposed to an agent framework.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, DynTool>,
}

impl ToolRegistry {
    /// Creates a new empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool, replacing any tool with the same name.
    pub fn register(&mut self, tool: DynTool) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Unregisters a tool from the registry.
    pub fn unregister(&mut self, name: &str) -> Option<DynTool> {
        self.tools.remove(name)
    }

    /// Gets a tool by name.
    pub fn get(&self, name: &str) -> Option<&DynTool> {
        self.tools.get(name)
    }

    /// Returns a list of all registered tools.
    pub fn list(&self) -> Vec<&DynTool> {
        self.tools.values().collect()
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Converts all tools to their definitions, ordered by name.
    pub fn to_tool_definitions(&self) -> Vec<crate::tool::ToolDefinition> {
        let mut definitions: Vec<_> = self
            .tools
            .values()
            .map(|tool| tool.to_definition())
            .collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools_count", &self.tools.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ToolRegistry {
    type Item = (&'a String, &'a DynTool);
    type IntoIter = std::collections::hash_map::Iter<'a, String, DynTool>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}

/// Builds a registry holding every customer-support tool.
///
/// The lookup tools share `api`; the returns tools share `rng`.
pub fn support_registry(api: Arc<dyn CatalogApi>, rng: SharedRng) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(OrderStatusTool::new(api.clone())));
    registry.register(Arc::new(SearchProductTool::new(api)));
    registry.register(Arc::new(InitiateReturnTool::new(rng.clone())));
    registry.register(Arc::new(GenerateReturnLabelTool::new(rng.clone())));
    registry.register(Arc::new(CheckReturnStatusTool::new(rng.clone())));
    registry.register(Arc::new(CalculateRefundTool::new(rng)));
    registry
}
