//! Example: page models over the resolution layer
//!
//! Demonstrates: a search homepage and results page built on lazily
//! resolving wrappers, with a device-dependent locator for the phone
//! layout.
//!
//! Run with: `cargo run --example search_page`

use pagina::{
    Button, Control, DeviceKind, LazyProp, Locator, MockDriver, MockElement, PageModel,
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

    /// The phone layout renders the search box with a class instead of
    /// the desktop id
    fn search_box(&self) -> &TextField {
        self.search_box.get_or_init(|| {
            let locator = if self.session.config().device() == DeviceKind::Phone {
                Locator::class_name("gLFyf")
            } else {
                Locator::id("lst-ib")
            };
            TextField::named(&self.scope(), locator, "search_box")
        })
    }

    fn search_button(&self) -> &Button {
        self.search_button
            .get_or_init(|| Button::named(&self.scope(), Locator::name("btnK"), "search_button"))
    }

    fn enter_text_and_search(&self, term: &str) -> PaginaResult<SearchResultsPage> {
        self.search_box().set_text(term)?;
        self.search_box().press_enter()?;
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
        Ok(self.title()? == "Example")
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
        "http://www.example.com".to_string()
    }

    fn is_at(&self) -> PaginaResult<bool> {
        Ok(true)
    }
}

fn seed_desktop_document(driver: &MockDriver) {
    let _ = driver.add_element(
        MockElement::new("search", "input")
            .attr("id", "lst-ib")
            .attr("name", "q"),
    );
    let _ = driver.add_element(
        MockElement::new("submit", "button")
            .attr("name", "btnK")
            .text("Search"),
    );
    driver.set_title("Example");
}

fn main() -> PaginaResult<()> {
    println!("=== Page Model Example ===\n");

    // 1. A session owns the driver and the run configuration
    let driver = Arc::new(MockDriver::new());
    seed_desktop_document(&driver);

    let mut config = RunConfig::new();
    config.set_app_setting("Device", "desktop");
    let session = Session::new(Arc::clone(&driver), config);
    println!("1. Session created");
    println!("   device: {:?}", session.config().device());
    println!("   emulation: {}", session.config().emulation_string());

    // 2. Pages navigate through the session, never through the driver
    let home = SearchHomePage::new(session);
    home.go()?;
    println!("\n2. Navigated to {}", home.url());
    println!("   on the page: {}", home.is_at()?);

    // 3. Wrappers are memoized; their handles stay live across renders
    println!("\n3. Typing a search term...");
    home.search_box().set_text("barn owl")?;
    println!("   search box exists: {}", home.search_box().exists());
    println!("   button text: {}", home.search_button().text()?);

    // 4. A re-render invalidates handles; the proxy re-queries
    let _ = driver.invalidate("search");
    println!("\n4. Page re-rendered; wrapper still resolves:");
    println!("   search box exists: {}", home.search_box().exists());

    // 5. Drive the flow to the results page
    let results = home.enter_text_and_search("barn owl")?;
    println!("\n5. Search submitted");
    println!("   results page reached: {}", results.is_at()?);

    println!("\nDone.");
    Ok(())
}
