//! End-to-end flow of a page model against the mock driver: typed
//! wrappers resolve lazily, text entry clears first, clicks hit the
//! element exactly once, and navigation assertions go through the page.

use pagina::{
    asserts, Button, Control, LazyProp, Locator, MockDriver, MockElement, PageModel,
    PaginaResult, RunConfig, Session, TextField,
};
use std::sync::Arc;

struct SearchHomePage {
    session: Session,
    search_box: LazyProp<TextField>,
    search_button: LazyProp<Button>,
}

impl SearchHomePage {
    fn new(session: Session) -> Self {
        Self {
            session,
            search_box: LazyProp::new(),
            search_button: LazyProp::new(),
        }
    }

    fn search_box(&self) -> &TextField {
        self.search_box
            .get_or_init(|| TextField::named(&self.scope(), Locator::name("q"), "search_box"))
    }

    fn search_button(&self) -> &Button {
        self.search_button
            .get_or_init(|| Button::named(&self.scope(), Locator::name("go"), "search_button"))
    }

    fn search(&self, term: &str) -> PaginaResult<SearchResultsPage> {
        self.search_box().set_text(term)?;
        self.search_button().click()?;
        Ok(SearchResultsPage {
            session: self.session.clone(),
        })
    }
}

impl PageModel for SearchHomePage {
    fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self) -> String {
        "http://www.example.com".to_string()
    }

    fn is_at(&self) -> PaginaResult<bool> {
        Ok(self.title()? == "Example Search")
    }
}

struct SearchResultsPage {
    session: Session,
}

impl PageModel for SearchResultsPage {
    fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self) -> String {
        "http://www.example.com/results".to_string()
    }

    fn is_at(&self) -> PaginaResult<bool> {
        Ok(self.title()?.starts_with("Results"))
    }
}

fn search_document() -> (Arc<MockDriver>, Session) {
    let driver = Arc::new(MockDriver::new());
    let _ = driver.add_element(MockElement::new("q-input", "input").attr("name", "q"));
    let _ = driver.add_element(
        MockElement::new("go-btn", "button")
            .attr("name", "go")
            .text("Search"),
    );
    driver.set_title("Example Search");
    let session = Session::new(Arc::clone(&driver), RunConfig::new());
    (driver, session)
}

#[test]
fn search_types_and_clicks_through_the_page_model() {
    let (driver, session) = search_document();
    let home = SearchHomePage::new(session);

    home.go().expect("navigation");
    assert!(driver.was_called("goto:http://www.example.com"));
    asserts::is_at_page(&home, "expected to land on the search homepage").expect("is_at");

    home.search_box().set_text("owl").expect("set_text");

    // clear-before-set: the field never appends
    let history = driver.history();
    let clear_at = history
        .iter()
        .position(|c| c.starts_with("clear:q-input"))
        .expect("clear was issued");
    let keys_at = history
        .iter()
        .position(|c| c.starts_with("send_keys:q-input:owl"))
        .expect("keystrokes were sent");
    assert!(clear_at < keys_at, "clear must precede the keystrokes");

    let handle = home.search_box().proxy().resolve().expect("resolve");
    assert_eq!(
        driver.attribute(&handle, "value").expect("attribute"),
        Some("owl".to_string())
    );

    home.search_button().click().expect("click");
    assert_eq!(driver.calls_of("click:go-btn"), 1);
}

#[test]
fn search_returns_a_results_page_bound_to_the_same_session() {
    let (driver, session) = search_document();
    let home = SearchHomePage::new(session);

    let results = home.search("barn owl").expect("search");
    driver.set_title("Results for barn owl");
    assert!(results.is_at().expect("is_at"));
}

#[test]
fn page_properties_survive_a_rerender() {
    let (driver, session) = search_document();
    let home = SearchHomePage::new(session);

    let before = home.search_box().proxy().resolve().expect("first resolve");
    let fresh = driver.invalidate("q-input").expect("invalidate");

    // the memoized wrapper re-queries through its proxy
    let after = home.search_box().proxy().resolve().expect("second resolve");
    assert_eq!(after, fresh);
    assert_ne!(after, before);

    home.search_box().set_text("tawny owl").expect("set_text");
    assert_eq!(
        driver.attribute(&after, "value").expect("attribute"),
        Some("tawny owl".to_string())
    );
}

#[test]
fn missing_elements_fail_with_the_property_name() {
    let (_, session) = search_document();
    let home = SearchHomePage::new(session);

    let ghost = TextField::named(&home.scope(), Locator::name("ghost"), "ghost_field");
    let err = ghost.set_text("boo").expect_err("must not resolve");
    let message = err.to_string();
    assert!(message.contains("ghost_field"));
    assert!(message.contains("by name \"ghost\""));
    assert!(!ghost.exists());
}
