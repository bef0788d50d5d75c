//! Browser capability boundary.
//!
//! [`Driver`] is the abstract trait this crate consumes for element
//! finding, element state, input, script execution and navigation. It
//! is never implemented for a real browser here; production code binds
//! a WebDriver/CDP client behind it, tests bind [`MockDriver`].
//!
//! The trait is synchronous: one session drives one browser handle from
//! one logical thread, and the only suspension points are the polling
//! waits in [`crate::wait`].

use crate::locator::Locator;
use crate::result::{PaginaError, PaginaResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

/// Opaque reference to a found on-page element.
///
/// A handle can become stale after navigation or DOM mutation; identity
/// of `id` is element identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Unique identifier for the element
    pub id: String,
    /// Element tag name
    pub tag_name: String,
}

impl ElementHandle {
    /// Create a new element handle
    #[must_use]
    pub fn new(id: impl Into<String>, tag_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag_name: tag_name.into(),
        }
    }
}

/// Abstract browser automation capability.
///
/// Everything the resolution layer needs from a browser, and nothing
/// more. `find` with an element root evaluates the locator against that
/// subtree only; a stale root yields an empty match set, so children of
/// a stale block uniformly fail to resolve until the parent is
/// re-obtained.
pub trait Driver: Send + Sync {
    /// Find all elements matching `locator` under `root` (or the whole
    /// document when `root` is `None`), in document order
    fn find(
        &self,
        root: Option<&ElementHandle>,
        locator: &Locator,
    ) -> PaginaResult<Vec<ElementHandle>>;

    /// Whether the handle no longer corresponds to live DOM content
    fn is_stale(&self, handle: &ElementHandle) -> bool;

    /// Whether the element is rendered visible
    fn is_displayed(&self, handle: &ElementHandle) -> PaginaResult<bool>;

    /// Whether the element is enabled for interaction
    fn is_enabled(&self, handle: &ElementHandle) -> PaginaResult<bool>;

    /// Whether the element (checkbox, radio, option) is selected
    fn is_selected(&self, handle: &ElementHandle) -> PaginaResult<bool>;

    /// Click the element
    fn click(&self, handle: &ElementHandle) -> PaginaResult<()>;

    /// Send keystrokes to the element
    fn send_keys(&self, handle: &ElementHandle, text: &str) -> PaginaResult<()>;

    /// Clear the element's value
    fn clear(&self, handle: &ElementHandle) -> PaginaResult<()>;

    /// Read an attribute, `None` when the attribute is absent
    fn attribute(&self, handle: &ElementHandle, name: &str) -> PaginaResult<Option<String>>;

    /// Visible text of the element
    fn text(&self, handle: &ElementHandle) -> PaginaResult<String>;

    /// Execute a script in the page and return its result
    fn execute_script(&self, script: &str) -> PaginaResult<serde_json::Value>;

    /// Number of in-flight asynchronous requests the page reports
    fn pending_requests(&self) -> PaginaResult<usize>;

    /// Navigate to a URL
    fn goto(&self, url: &str) -> PaginaResult<()>;

    /// Go back in history
    fn back(&self) -> PaginaResult<()>;

    /// Go forward in history
    fn forward(&self) -> PaginaResult<()>;

    /// Reload the current page
    fn refresh(&self) -> PaginaResult<()>;

    /// Current page title
    fn title(&self) -> PaginaResult<String>;

    /// Current page URL
    fn current_url(&self) -> PaginaResult<String>;

    /// Full page source
    fn page_source(&self) -> PaginaResult<String>;
}

/// A seedable element for [`MockDriver`]
#[derive(Debug, Clone)]
pub struct MockElement {
    handle: ElementHandle,
    parent: Option<String>,
    attributes: HashMap<String, String>,
    text: String,
    displayed: bool,
    enabled: bool,
    selected: bool,
}

impl MockElement {
    /// Create a visible, enabled, unselected element
    #[must_use]
    pub fn new(id: impl Into<String>, tag_name: impl Into<String>) -> Self {
        Self {
            handle: ElementHandle::new(id, tag_name),
            parent: None,
            attributes: HashMap::new(),
            text: String::new(),
            displayed: true,
            enabled: true,
            selected: false,
        }
    }

    /// Set an attribute
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the visible text
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set visibility
    #[must_use]
    pub fn displayed(mut self, displayed: bool) -> Self {
        self.displayed = displayed;
        self
    }

    /// Set enabled state
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set selected state
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Nest this element under a parent element id
    #[must_use]
    pub fn child_of(mut self, parent_id: impl Into<String>) -> Self {
        self.parent = Some(parent_id.into());
        self
    }

    fn matches(&self, locator: &Locator) -> bool {
        let attr = |name: &str| self.attributes.get(name).map(String::as_str);
        match locator {
            Locator::Id(v) => attr("id") == Some(v.as_str()),
            Locator::Name(v) => attr("name") == Some(v.as_str()),
            Locator::ClassName(v) => attr("class")
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == v)),
            Locator::TagName(v) => self.handle.tag_name == *v,
            Locator::LinkText(v) => self.handle.tag_name == "a" && self.text == *v,
            Locator::Css(v) => self.matches_simple_css(v),
            // The mock document has no XPath engine
            Locator::XPath(_) => false,
        }
    }

    // Supports the selector forms tests actually use: "tag", "#id",
    // ".class", "tag.class" and "tag#id".
    fn matches_simple_css(&self, selector: &str) -> bool {
        let attr = |name: &str| self.attributes.get(name).map(String::as_str);
        if let Some((tag, id)) = selector.split_once('#') {
            (tag.is_empty() || self.handle.tag_name == tag) && attr("id") == Some(id)
        } else if let Some((tag, class)) = selector.split_once('.') {
            (tag.is_empty() || self.handle.tag_name == tag)
                && attr("class").is_some_and(|cs| cs.split_whitespace().any(|c| c == class))
        } else {
            self.handle.tag_name == selector
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    elements: Vec<MockElement>,
    stale: HashSet<String>,
    calls: Vec<String>,
    find_invocations: usize,
    pending_requests: usize,
    url: String,
    title: String,
    page_source: String,
    script_results: Vec<serde_json::Value>,
    generation: usize,
}

/// In-memory driver for unit testing the resolution layer.
///
/// Keeps a flat element table with parent links, simulates staleness by
/// re-identifying elements ([`MockDriver::invalidate`]), and records
/// every call for verification via [`MockDriver::was_called`] and
/// [`MockDriver::calls_of`].
#[derive(Debug, Default)]
pub struct MockDriver {
    state: Mutex<MockState>,
}

impl MockDriver {
    /// Create an empty mock document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock driver state poisoned")
    }

    /// Add an element to the document, returning its handle
    pub fn add_element(&self, element: MockElement) -> ElementHandle {
        let handle = element.handle.clone();
        self.state().elements.push(element);
        handle
    }

    /// Simulate a re-render: the element stays in the document but its
    /// old handle becomes stale and a fresh handle identifies it.
    /// Returns the new handle.
    pub fn invalidate(&self, id: &str) -> Option<ElementHandle> {
        let mut state = self.state();
        state.generation += 1;
        let new_id = format!("{id}~{}", state.generation);
        let element = state.elements.iter_mut().find(|e| e.handle.id == id)?;
        element.handle.id = new_id.clone();
        let fresh = element.handle.clone();
        // the subtree survives the re-render; reparent children onto
        // the fresh identity
        for child in &mut state.elements {
            if child.parent.as_deref() == Some(id) {
                child.parent = Some(new_id.clone());
            }
        }
        let _ = state.stale.insert(id.to_string());
        Some(fresh)
    }

    /// Remove an element (and its descendants stay but become orphaned
    /// from document-root queries only via their own ids)
    pub fn remove_element(&self, id: &str) {
        let mut state = self.state();
        state.elements.retain(|e| e.handle.id != id);
        let _ = state.stale.insert(id.to_string());
    }

    /// Set an element attribute directly
    pub fn set_attribute(&self, id: &str, name: &str, value: &str) {
        let mut state = self.state();
        if let Some(element) = state.elements.iter_mut().find(|e| e.handle.id == id) {
            let _ = element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    /// Set an element's visibility
    pub fn set_displayed(&self, id: &str, displayed: bool) {
        let mut state = self.state();
        if let Some(element) = state.elements.iter_mut().find(|e| e.handle.id == id) {
            element.displayed = displayed;
        }
    }

    /// Set the page-reported in-flight request count
    pub fn set_pending_requests(&self, count: usize) {
        self.state().pending_requests = count;
    }

    /// Set the page title
    pub fn set_title(&self, title: impl Into<String>) {
        self.state().title = title.into();
    }

    /// Set the page source
    pub fn set_page_source(&self, source: impl Into<String>) {
        self.state().page_source = source.into();
    }

    /// Queue a script execution result
    pub fn push_script_result(&self, result: serde_json::Value) {
        self.state().script_results.push(result);
    }

    /// Full recorded call history
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    /// Whether any recorded call starts with `method`
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.state().calls.iter().any(|c| c.starts_with(method))
    }

    /// Number of recorded calls starting with `method`
    #[must_use]
    pub fn calls_of(&self, method: &str) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| c.starts_with(method))
            .count()
    }

    /// Number of `find` invocations seen so far
    #[must_use]
    pub fn find_invocations(&self) -> usize {
        self.state().find_invocations
    }

    fn is_descendant(elements: &[MockElement], element: &MockElement, ancestor_id: &str) -> bool {
        let mut current = element.parent.as_deref();
        while let Some(parent_id) = current {
            if parent_id == ancestor_id {
                return true;
            }
            current = elements
                .iter()
                .find(|e| e.handle.id == parent_id)
                .and_then(|e| e.parent.as_deref());
        }
        false
    }

    fn live_element<'a>(
        state: &'a MockState,
        handle: &ElementHandle,
    ) -> Option<&'a MockElement> {
        if state.stale.contains(&handle.id) {
            return None;
        }
        state.elements.iter().find(|e| e.handle.id == handle.id)
    }

    fn require_live<'a>(
        state: &'a MockState,
        handle: &ElementHandle,
        operation: &str,
    ) -> PaginaResult<&'a MockElement> {
        Self::live_element(state, handle).ok_or_else(|| PaginaError::Driver {
            message: format!("{operation} on stale or unknown element {}", handle.id),
        })
    }
}

impl Driver for MockDriver {
    fn find(
        &self,
        root: Option<&ElementHandle>,
        locator: &Locator,
    ) -> PaginaResult<Vec<ElementHandle>> {
        let mut state = self.state();
        state.find_invocations += 1;
        state.calls.push(format!("find:{locator}"));

        // A stale subtree root yields nothing.
        if let Some(root) = root {
            if state.stale.contains(&root.id) {
                return Ok(Vec::new());
            }
        }

        let elements = &state.elements;
        let matches = elements
            .iter()
            .filter(|e| match root {
                Some(root) => Self::is_descendant(elements, e, &root.id),
                None => true,
            })
            .filter(|e| e.matches(locator))
            .map(|e| e.handle.clone())
            .collect();
        Ok(matches)
    }

    fn is_stale(&self, handle: &ElementHandle) -> bool {
        let state = self.state();
        state.stale.contains(&handle.id)
            || !state.elements.iter().any(|e| e.handle.id == handle.id)
    }

    fn is_displayed(&self, handle: &ElementHandle) -> PaginaResult<bool> {
        Ok(MockDriver::live_element(&self.state(), handle).is_some_and(|e| e.displayed))
    }

    fn is_enabled(&self, handle: &ElementHandle) -> PaginaResult<bool> {
        Ok(MockDriver::live_element(&self.state(), handle).is_some_and(|e| e.enabled))
    }

    fn is_selected(&self, handle: &ElementHandle) -> PaginaResult<bool> {
        Ok(MockDriver::live_element(&self.state(), handle).is_some_and(|e| e.selected))
    }

    fn click(&self, handle: &ElementHandle) -> PaginaResult<()> {
        let mut state = self.state();
        state.calls.push(format!("click:{}", handle.id));
        let _ = MockDriver::require_live(&state, handle, "click")?;

        // Checkbox clicks toggle; radio clicks select the target and
        // deselect the rest of its name group.
        let kind = state
            .elements
            .iter()
            .find(|e| e.handle.id == handle.id)
            .and_then(|e| e.attributes.get("type").cloned());
        match kind.as_deref() {
            Some("checkbox") => {
                if let Some(e) = state.elements.iter_mut().find(|e| e.handle.id == handle.id) {
                    e.selected = !e.selected;
                }
            }
            Some("radio") => {
                let group = state
                    .elements
                    .iter()
                    .find(|e| e.handle.id == handle.id)
                    .and_then(|e| e.attributes.get("name").cloned());
                for e in &mut state.elements {
                    if e.attributes.get("type").map(String::as_str) == Some("radio")
                        && e.attributes.get("name") == group.as_ref()
                    {
                        e.selected = e.handle.id == handle.id;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn send_keys(&self, handle: &ElementHandle, text: &str) -> PaginaResult<()> {
        let mut state = self.state();
        state.calls.push(format!("send_keys:{}:{text}", handle.id));
        let _ = MockDriver::require_live(&state, handle, "send_keys")?;
        if let Some(e) = state.elements.iter_mut().find(|e| e.handle.id == handle.id) {
            e.attributes
                .entry("value".to_string())
                .or_default()
                .push_str(text);
        }
        Ok(())
    }

    fn clear(&self, handle: &ElementHandle) -> PaginaResult<()> {
        let mut state = self.state();
        state.calls.push(format!("clear:{}", handle.id));
        let _ = MockDriver::require_live(&state, handle, "clear")?;
        if let Some(e) = state.elements.iter_mut().find(|e| e.handle.id == handle.id) {
            let _ = e.attributes.insert("value".to_string(), String::new());
        }
        Ok(())
    }

    fn attribute(&self, handle: &ElementHandle, name: &str) -> PaginaResult<Option<String>> {
        let state = self.state();
        let element = MockDriver::require_live(&state, handle, "attribute")?;
        Ok(element.attributes.get(name).cloned())
    }

    fn text(&self, handle: &ElementHandle) -> PaginaResult<String> {
        let state = self.state();
        let element = MockDriver::require_live(&state, handle, "text")?;
        Ok(element.text.clone())
    }

    fn execute_script(&self, script: &str) -> PaginaResult<serde_json::Value> {
        let mut state = self.state();
        state.calls.push(format!("execute_script:{script}"));
        Ok(if state.script_results.is_empty() {
            serde_json::Value::Null
        } else {
            state.script_results.remove(0)
        })
    }

    fn pending_requests(&self) -> PaginaResult<usize> {
        Ok(self.state().pending_requests)
    }

    fn goto(&self, url: &str) -> PaginaResult<()> {
        let mut state = self.state();
        state.calls.push(format!("goto:{url}"));
        state.url = url.to_string();
        Ok(())
    }

    fn back(&self) -> PaginaResult<()> {
        self.state().calls.push("back".to_string());
        Ok(())
    }

    fn forward(&self) -> PaginaResult<()> {
        self.state().calls.push("forward".to_string());
        Ok(())
    }

    fn refresh(&self) -> PaginaResult<()> {
        self.state().calls.push("refresh".to_string());
        Ok(())
    }

    fn title(&self) -> PaginaResult<String> {
        Ok(self.state().title.clone())
    }

    fn current_url(&self) -> PaginaResult<String> {
        Ok(self.state().url.clone())
    }

    fn page_source(&self) -> PaginaResult<String> {
        Ok(self.state().page_source.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seeded() -> MockDriver {
        let driver = MockDriver::new();
        let _ = driver.add_element(MockElement::new("q-input", "input").attr("name", "q"));
        let _ = driver.add_element(
            MockElement::new("go-btn", "button")
                .attr("name", "go")
                .text("Search"),
        );
        driver
    }

    mod find_tests {
        use super::*;

        #[test]
        fn test_find_by_name() {
            let driver = seeded();
            let found = driver.find(None, &Locator::name("q")).unwrap();
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].id, "q-input");
        }

        #[test]
        fn test_find_nothing() {
            let driver = seeded();
            let found = driver.find(None, &Locator::name("missing")).unwrap();
            assert!(found.is_empty());
        }

        #[test]
        fn test_find_counts_invocations() {
            let driver = seeded();
            let _ = driver.find(None, &Locator::name("q")).unwrap();
            let _ = driver.find(None, &Locator::name("q")).unwrap();
            assert_eq!(driver.find_invocations(), 2);
        }

        #[test]
        fn test_find_scoped_to_subtree() {
            let driver = MockDriver::new();
            let _ = driver.add_element(MockElement::new("form-1", "form"));
            let _ = driver.add_element(
                MockElement::new("inner", "input")
                    .attr("name", "q")
                    .child_of("form-1"),
            );
            let _ = driver.add_element(MockElement::new("outer", "input").attr("name", "q"));

            let root = ElementHandle::new("form-1", "form");
            let found = driver.find(Some(&root), &Locator::name("q")).unwrap();
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].id, "inner");
        }

        #[test]
        fn test_find_with_stale_root_is_empty() {
            let driver = MockDriver::new();
            let root = driver.add_element(MockElement::new("form-1", "form"));
            let _ = driver.add_element(
                MockElement::new("inner", "input")
                    .attr("name", "q")
                    .child_of("form-1"),
            );
            let _ = driver.invalidate("form-1");
            let found = driver.find(Some(&root), &Locator::name("q")).unwrap();
            assert!(found.is_empty());
        }

        #[test]
        fn test_find_document_order() {
            let driver = MockDriver::new();
            let _ = driver.add_element(MockElement::new("a", "li"));
            let _ = driver.add_element(MockElement::new("b", "li"));
            let found = driver.find(None, &Locator::tag_name("li")).unwrap();
            assert_eq!(found[0].id, "a");
            assert_eq!(found[1].id, "b");
        }
    }

    mod css_tests {
        use super::*;

        #[test]
        fn test_css_by_tag() {
            let driver = seeded();
            let found = driver.find(None, &Locator::css("button")).unwrap();
            assert_eq!(found.len(), 1);
        }

        #[test]
        fn test_css_by_class() {
            let driver = MockDriver::new();
            let _ = driver.add_element(
                MockElement::new("sb", "input").attr("class", "gLFyf wide"),
            );
            let found = driver.find(None, &Locator::css(".gLFyf")).unwrap();
            assert_eq!(found.len(), 1);
            let found = driver.find(None, &Locator::css("input.gLFyf")).unwrap();
            assert_eq!(found.len(), 1);
        }

        #[test]
        fn test_css_by_id() {
            let driver = MockDriver::new();
            let _ = driver.add_element(MockElement::new("sb", "input").attr("id", "lst-ib"));
            let found = driver.find(None, &Locator::css("#lst-ib")).unwrap();
            assert_eq!(found.len(), 1);
        }
    }

    mod staleness_tests {
        use super::*;

        #[test]
        fn test_invalidate_makes_old_handle_stale() {
            let driver = seeded();
            let old = ElementHandle::new("q-input", "input");
            assert!(!driver.is_stale(&old));

            let fresh = driver.invalidate("q-input").unwrap();
            assert!(driver.is_stale(&old));
            assert!(!driver.is_stale(&fresh));
        }

        #[test]
        fn test_invalidated_element_is_refound_with_new_identity() {
            let driver = seeded();
            let fresh = driver.invalidate("q-input").unwrap();
            let found = driver.find(None, &Locator::name("q")).unwrap();
            assert_eq!(found, vec![fresh]);
        }

        #[test]
        fn test_removed_element_is_stale_and_gone() {
            let driver = seeded();
            let handle = ElementHandle::new("go-btn", "button");
            driver.remove_element("go-btn");
            assert!(driver.is_stale(&handle));
            assert!(driver.find(None, &Locator::name("go")).unwrap().is_empty());
        }
    }

    mod interaction_tests {
        use super::*;

        #[test]
        fn test_click_records_call() {
            let driver = seeded();
            let handle = ElementHandle::new("go-btn", "button");
            driver.click(&handle).unwrap();
            assert!(driver.was_called("click:go-btn"));
            assert_eq!(driver.calls_of("click"), 1);
        }

        #[test]
        fn test_click_toggles_checkbox() {
            let driver = MockDriver::new();
            let handle = driver
                .add_element(MockElement::new("cb", "input").attr("type", "checkbox"));
            assert!(!driver.is_selected(&handle).unwrap());
            driver.click(&handle).unwrap();
            assert!(driver.is_selected(&handle).unwrap());
            driver.click(&handle).unwrap();
            assert!(!driver.is_selected(&handle).unwrap());
        }

        #[test]
        fn test_click_selects_radio_exclusively() {
            let driver = MockDriver::new();
            let a = driver.add_element(
                MockElement::new("r-a", "input")
                    .attr("type", "radio")
                    .attr("name", "size")
                    .selected(true),
            );
            let b = driver.add_element(
                MockElement::new("r-b", "input")
                    .attr("type", "radio")
                    .attr("name", "size"),
            );
            driver.click(&b).unwrap();
            assert!(!driver.is_selected(&a).unwrap());
            assert!(driver.is_selected(&b).unwrap());
        }

        #[test]
        fn test_send_keys_appends_and_clear_empties() {
            let driver = seeded();
            let handle = ElementHandle::new("q-input", "input");
            driver.send_keys(&handle, "ow").unwrap();
            driver.send_keys(&handle, "l").unwrap();
            assert_eq!(
                driver.attribute(&handle, "value").unwrap(),
                Some("owl".to_string())
            );
            driver.clear(&handle).unwrap();
            assert_eq!(
                driver.attribute(&handle, "value").unwrap(),
                Some(String::new())
            );
        }

        #[test]
        fn test_interaction_with_stale_handle_errors() {
            let driver = seeded();
            let old = ElementHandle::new("q-input", "input");
            let _ = driver.invalidate("q-input");
            assert!(driver.click(&old).is_err());
            assert!(driver.send_keys(&old, "x").is_err());
        }
    }

    mod navigation_tests {
        use super::*;

        #[test]
        fn test_goto_updates_url() {
            let driver = MockDriver::new();
            driver.goto("http://www.example.com").unwrap();
            assert_eq!(driver.current_url().unwrap(), "http://www.example.com");
            assert!(driver.was_called("goto:http://www.example.com"));
        }

        #[test]
        fn test_history_navigation_is_recorded() {
            let driver = MockDriver::new();
            driver.back().unwrap();
            driver.forward().unwrap();
            driver.refresh().unwrap();
            assert!(driver.was_called("back"));
            assert!(driver.was_called("forward"));
            assert!(driver.was_called("refresh"));
        }
    }

    mod script_tests {
        use super::*;

        #[test]
        fn test_script_results_are_queued() {
            let driver = MockDriver::new();
            driver.push_script_result(serde_json::json!(3));
            assert_eq!(
                driver.execute_script("return jQuery.active").unwrap(),
                serde_json::json!(3)
            );
            assert_eq!(
                driver.execute_script("return jQuery.active").unwrap(),
                serde_json::Value::Null
            );
        }

        #[test]
        fn test_pending_requests() {
            let driver = MockDriver::new();
            assert_eq!(driver.pending_requests().unwrap(), 0);
            driver.set_pending_requests(2);
            assert_eq!(driver.pending_requests().unwrap(), 2);
        }
    }
}
