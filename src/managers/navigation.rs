//! Navigation controller: translates toolbar actions into engine calls.
//!
//! Holds no state of its own. Every operation is a silent no-op when there is
//! no active engine view (an auxiliary tab is focused, or no tab exists yet).

use crate::engine::PageEngine;
use crate::resolver;

pub struct NavigationController;

impl NavigationController {
    pub fn back(&self, view: Option<&dyn PageEngine>) {
        if let Some(v) = view {
            v.back();
        }
    }

    pub fn forward(&self, view: Option<&dyn PageEngine>) {
        if let Some(v) = view {
            v.forward();
        }
    }

    pub fn reload(&self, view: Option<&dyn PageEngine>) {
        if let Some(v) = view {
            v.reload();
        }
    }

    /// Resolves address-bar input and loads it in the active view.
    ///
    /// Returns the resolved URL, or `None` when the input was blank or no
    /// view is active (no navigation performed either way).
    pub fn navigate(&self, view: Option<&dyn PageEngine>, input: &str) -> Option<String> {
        let url = resolver::resolve(input)?;
        let v = view?;
        v.load(&url);
        Some(url)
    }
}
