//! Scrollable option list with a highlight cursor and a selected marker

use crossterm::event::KeyCode;
use opsdeck_core::{Component, EventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

/// Marker drawn in front of the selected option
pub const SELECTED_MARKER: &str = "● ";
const UNSELECTED_MARKER: &str = "  ";

/// Props for SelectList component
pub struct SelectListProps<'a, A> {
    /// Option labels, in display order
    pub items: &'a [String],
    /// Index under the cursor
    pub highlighted: usize,
    /// Index of the committed selection, if it is among `items`
    pub selected: Option<usize>,
    pub is_focused: bool,
    pub show_border: bool,
    /// Cursor moved
    pub on_highlight: fn(usize) -> A,
    /// Enter pressed on the highlighted option
    pub on_select: fn(usize) -> A,
}

/// A scrollable list for picking one option
///
/// j/k/up/down/home/end move the highlight, enter commits it.
#[derive(Default)]
pub struct SelectList {
    scroll_offset: usize,
}

impl SelectList {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_visible(&mut self, highlighted: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if highlighted < self.scroll_offset {
            self.scroll_offset = highlighted;
        } else if highlighted >= self.scroll_offset + viewport_height {
            self.scroll_offset = highlighted + 1 - viewport_height;
        }
    }
}

impl<A> Component<A> for SelectList {
    type Props<'a> = SelectListProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.items.is_empty() {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        let last = props.items.len() - 1;
        let current = props.highlighted.min(last);
        let target = match key.code {
            KeyCode::Char('j') | KeyCode::Down => (current + 1).min(last),
            KeyCode::Char('k') | KeyCode::Up => current.saturating_sub(1),
            KeyCode::Char('g') | KeyCode::Home => 0,
            KeyCode::Char('G') | KeyCode::End => last,
            KeyCode::Enter => return Some((props.on_select)(current)),
            _ => return None,
        };

        if target == props.highlighted {
            return None;
        }
        Some((props.on_highlight)(target))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chrome = if props.show_border { 2 } else { 0 };
        let viewport_height = area.height.saturating_sub(chrome) as usize;
        self.ensure_visible(props.highlighted, viewport_height);

        let items: Vec<ListItem> = props
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if props.selected == Some(i) {
                    SELECTED_MARKER
                } else {
                    UNSELECTED_MARKER
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::raw(item.as_str()),
                ]))
            })
            .collect();

        let mut list = List::new(items);
        if props.is_focused {
            list = list.highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        }
        if props.show_border {
            let border = if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            list = list.block(Block::bordered().border_style(border));
        }

        let mut state = ListState::default().with_selected(Some(props.highlighted));
        *state.offset_mut() = self.scroll_offset;

        frame.render_stateful_widget(list, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_core::testing::{key, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Highlight(usize),
        Select(usize),
    }

    fn names() -> Vec<String> {
        vec!["Cred 1".into(), "Cred 2".into(), "Cred 3".into()]
    }

    fn props(items: &[String], highlighted: usize) -> SelectListProps<'_, TestAction> {
        SelectListProps {
            items,
            highlighted,
            selected: None,
            is_focused: true,
            show_border: true,
            on_highlight: TestAction::Highlight,
            on_select: TestAction::Select,
        }
    }

    fn press(
        list: &mut SelectList,
        k: &str,
        props: SelectListProps<'_, TestAction>,
    ) -> Vec<TestAction> {
        list.handle_event(&EventKind::Key(key(k)), props)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_navigation_emits_highlight() {
        let mut list = SelectList::new();
        let items = names();

        assert_eq!(
            press(&mut list, "j", props(&items, 0)),
            vec![TestAction::Highlight(1)]
        );
        assert_eq!(
            press(&mut list, "up", props(&items, 2)),
            vec![TestAction::Highlight(1)]
        );
        assert_eq!(
            press(&mut list, "end", props(&items, 0)),
            vec![TestAction::Highlight(2)]
        );
    }

    #[test]
    fn test_navigation_stops_at_bounds() {
        let mut list = SelectList::new();
        let items = names();

        assert!(press(&mut list, "k", props(&items, 0)).is_empty());
        assert!(press(&mut list, "down", props(&items, 2)).is_empty());
    }

    #[test]
    fn test_enter_selects_highlighted() {
        let mut list = SelectList::new();
        let items = names();

        assert_eq!(
            press(&mut list, "enter", props(&items, 1)),
            vec![TestAction::Select(1)]
        );
    }

    #[test]
    fn test_unfocused_or_empty_ignores_events() {
        let mut list = SelectList::new();
        let items = names();
        let mut unfocused = props(&items, 0);
        unfocused.is_focused = false;
        assert!(press(&mut list, "j", unfocused).is_empty());

        assert!(press(&mut list, "enter", props(&[], 0)).is_empty());
    }

    #[test]
    fn test_render_marks_selection() {
        let mut render = RenderHarness::new(30, 6);
        let mut list = SelectList::new();
        let items = names();

        let output = render.render_to_string_plain(|frame| {
            let mut p = props(&items, 0);
            p.selected = Some(1);
            let area = frame.area();
            list.render(frame, area, p);
        });

        assert!(output.contains("Cred 1"));
        assert!(output.contains("● Cred 2"));
        assert!(output.contains("Cred 3"));
    }
}
