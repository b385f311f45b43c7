//! Form widgets for opsdeck screens
//!
//! Widgets implement `Component<A>` and emit actions through callback
//! functions passed in their props. Most of them are read-only renderers.
//!
//! - [`render_form_group`]: label with an optional required marker
//! - [`TextField`]: single line, multi line or masked value
//! - [`Select`] / [`MultiSelect`]: collapsed dropdown and chip list
//! - [`SelectList`]: option list with highlight and selection marker
//! - [`render_modal`]: titled overlay over a dimmed background
//!
//! ```ignore
//! use opsdeck_widgets::{SelectList, SelectListProps};
//!
//! let mut list = SelectList::default();
//! list.render(frame, area, SelectListProps {
//!     items: &names,
//!     highlighted: state.highlighted,
//!     selected: state.selected_index(),
//!     is_focused: true,
//!     show_border: true,
//!     on_highlight: Action::LookupHighlight,
//!     on_select: Action::LookupSelect,
//! });
//! ```

mod form_group;
mod modal;
mod select;
mod select_list;
mod text_field;

pub use form_group::{render_form_group, FormGroupProps, REQUIRED_MARKER};
pub use modal::{centered_rect, dim_buffer, render_modal, ModalStyle};
pub use select::{MultiSelect, MultiSelectProps, Select, SelectProps};
pub use select_list::{SelectList, SelectListProps, SELECTED_MARKER};
pub use text_field::{TextField, TextFieldProps, TextVariant, MASK_CHAR};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        centered_rect, render_form_group, render_modal, FormGroupProps, ModalStyle, MultiSelect,
        MultiSelectProps, Select, SelectList, SelectListProps, SelectProps, TextField,
        TextFieldProps, TextVariant,
    };
}
