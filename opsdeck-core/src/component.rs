//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A pure UI component that renders from props and emits actions
///
/// Rules:
/// 1. Props carry everything needed to render; components never own domain data
/// 2. `handle_event` returns actions and never mutates application state
/// 3. `render` only reads props (plus private view state such as a scroll offset)
///
/// Callbacks are passed through props as plain `fn` constructors, so a
/// component stays decoupled from the action type of whoever embeds it:
///
/// ```ignore
/// struct CredentialField;
///
/// struct CredentialFieldProps<'a, A> {
///     label: &'a str,
///     is_focused: bool,
///     on_clear: fn() -> A,
/// }
///
/// impl<A> Component<A> for CredentialField {
///     type Props<'a> = CredentialFieldProps<'a, A>;
///
///     fn handle_event(
///         &mut self,
///         event: &EventKind,
///         props: Self::Props<'_>,
///     ) -> impl IntoIterator<Item = A> {
///         match event {
///             EventKind::Key(key) if props.is_focused && key.code == KeyCode::Delete => {
///                 Some((props.on_clear)())
///             }
///             _ => None,
///         }
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         frame.render_widget(Paragraph::new(props.label), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Map an event to actions
    ///
    /// Returns anything iterable: `None`, `Some(action)`, or a `Vec`.
    /// Render-only components keep the default, which emits nothing.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component into `area`
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
