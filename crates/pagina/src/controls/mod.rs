//! Typed element wrappers.
//!
//! Each wrapper is a thin, semantic layer over exactly one
//! [`ElementProxy`]: the proxy does resolution, staleness recovery and
//! waiting; the wrapper adds the operations that make sense for its
//! control category. Wrappers hold a proxy rather than extending a
//! base type — the shared surface lives on the proxy and is reached
//! through the [`Control`] trait.

mod busy;
mod button;
mod checkbox;
mod radio_group;
mod select_list;
mod text_block;
mod text_field;

pub use busy::BusyIndicator;
pub use button::{Button, Link};
pub use checkbox::{CheckBox, RadioButton};
pub use radio_group::RadioGroup;
pub use select_list::SelectList;
pub use text_block::TextBlock;
pub use text_field::{TextField, ENTER};

use crate::element::ElementProxy;
use crate::result::PaginaResult;
use crate::wait::WaitOptions;

/// Common surface of all proxy-backed wrappers
pub trait Control {
    /// The proxy this wrapper operates through
    fn proxy(&self) -> &ElementProxy;

    /// Whether the element currently exists; never fails
    fn exists(&self) -> bool {
        self.proxy().exists()
    }

    /// Whether the element exists and is displayed
    fn is_displayed(&self) -> bool {
        self.proxy().is_displayed()
    }

    /// Whether the element exists and is enabled
    fn is_enabled(&self) -> bool {
        self.proxy().is_enabled()
    }

    /// Block until the element is visible
    ///
    /// # Errors
    ///
    /// `WaitTimeout` on expiry, `InvalidConfiguration` for wrappers
    /// bound to a fixed handle
    fn wait_until_visible(&self, options: &WaitOptions) -> PaginaResult<()> {
        self.proxy().wait_until_visible(options)
    }

    /// Block until the element is invisible or absent
    ///
    /// # Errors
    ///
    /// `WaitTimeout` on expiry, `InvalidConfiguration` for wrappers
    /// bound to a fixed handle
    fn wait_until_invisible(&self, options: &WaitOptions) -> PaginaResult<()> {
        self.proxy().wait_until_invisible(options)
    }
}
