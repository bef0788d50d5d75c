//! Radio button groups.
//!
//! A group is the set of radio inputs sharing one `name` attribute,
//! keyed by each element's `value` attribute. The whole mapping is
//! rebuilt whenever any member has gone stale or the cache is empty —
//! partial staleness means the page re-rendered, and a partial repair
//! would mix handles from different renders.

use super::{Control, RadioButton};
use crate::locator::Locator;
use crate::result::{PaginaError, PaginaResult};
use crate::scope::SearchScope;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// A named collection of radio buttons, bulk-requeried together
#[derive(Debug)]
pub struct RadioGroup {
    scope: SearchScope,
    group_name: String,
    cache: RefCell<Option<BTreeMap<String, RadioButton>>>,
}

impl RadioGroup {
    /// Create a group over the radio inputs named `group_name` within
    /// `scope`. The name is assumed unique to the set on the page and
    /// each member is assumed to carry a unique `value` attribute.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when `group_name` is empty
    pub fn new(scope: &SearchScope, group_name: impl Into<String>) -> PaginaResult<Self> {
        let group_name = group_name.into();
        if group_name.is_empty() {
            return Err(PaginaError::InvalidConfiguration {
                message: "radio group name cannot be empty".to_string(),
            });
        }
        Ok(Self {
            scope: scope.clone(),
            group_name,
            cache: RefCell::new(None),
        })
    }

    /// The group's shared `name` attribute
    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    fn rebuild_needed(&self) -> bool {
        match self.cache.borrow().as_ref() {
            None => true,
            Some(map) if map.is_empty() => true,
            Some(map) => map.values().any(|rb| rb.proxy().is_requery_needed()),
        }
    }

    fn ensure_fresh(&self) -> PaginaResult<()> {
        if !self.rebuild_needed() {
            return Ok(());
        }
        debug!(group = %self.group_name, "rebuilding radio group mapping");

        let driver = self.scope.driver();
        let mut map = BTreeMap::new();
        for handle in self.scope.find(&Locator::name(&self.group_name))? {
            let value = driver.attribute(&handle, "value")?.unwrap_or_default();
            let member = RadioButton::from_handle(
                Arc::clone(driver),
                handle,
                format!("{} option {value:?}", self.group_name),
            );
            // Duplicate values are documented invalid; last one wins.
            let _ = map.insert(value, member);
        }
        *self.cache.borrow_mut() = Some(map);
        Ok(())
    }

    /// All members of the group, ordered by option value
    ///
    /// # Errors
    ///
    /// Propagates driver failures during a rebuild
    pub fn members(&self) -> PaginaResult<Vec<RadioButton>> {
        self.ensure_fresh()?;
        Ok(self
            .cache
            .borrow()
            .as_ref()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default())
    }

    /// The available option values, sorted
    ///
    /// # Errors
    ///
    /// Propagates driver failures during a rebuild
    pub fn option_values(&self) -> PaginaResult<Vec<String>> {
        self.ensure_fresh()?;
        Ok(self
            .cache
            .borrow()
            .as_ref()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default())
    }

    /// Number of members in the group
    ///
    /// # Errors
    ///
    /// Propagates driver failures during a rebuild
    pub fn count(&self) -> PaginaResult<usize> {
        self.ensure_fresh()?;
        Ok(self.cache.borrow().as_ref().map_or(0, BTreeMap::len))
    }

    /// The member carrying `value`, `None` when absent
    ///
    /// # Errors
    ///
    /// Propagates driver failures during a rebuild
    pub fn get(&self, value: &str) -> PaginaResult<Option<RadioButton>> {
        self.ensure_fresh()?;
        Ok(self
            .cache
            .borrow()
            .as_ref()
            .and_then(|map| map.get(value).cloned()))
    }

    /// Select or deselect the member carrying `value`
    ///
    /// # Errors
    ///
    /// `OptionNotFound` when no member carries `value`
    pub fn select(&self, value: &str, selected: bool) -> PaginaResult<()> {
        match self.get(value)? {
            Some(member) => member.set_selected(selected),
            None => Err(PaginaError::OptionNotFound {
                wanted: value.to_string(),
                available: self.option_values()?,
            }),
        }
    }

    /// True only when zero members are hidden. Not the complement of
    /// [`RadioGroup::all_hidden`]: a mixed-visibility group is false
    /// for both.
    ///
    /// # Errors
    ///
    /// Propagates driver failures during a rebuild
    pub fn all_visible(&self) -> PaginaResult<bool> {
        Ok(!self
            .members()?
            .iter()
            .any(|member| !member.is_displayed()))
    }

    /// True only when zero members are visible. Not the complement of
    /// [`RadioGroup::all_visible`].
    ///
    /// # Errors
    ///
    /// Propagates driver failures during a rebuild
    pub fn all_hidden(&self) -> PaginaResult<bool> {
        Ok(!self.members()?.iter().any(Control::is_displayed))
    }
}
