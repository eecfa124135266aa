use super::App;
use crate::board::{Board, Cell, StatusColor};
use crate::keyboard::{Key, Keyboard};
use ratatui::{
    prelude::*,
    widgets::{block::*, *},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const KEY_HEIGHT: u16 = 3;

/// Screen regions for one viewport. Computed once per frame and kept
/// on the app, so mouse clicks are resolved against the same
/// rectangles the widgets were drawn into.
#[derive(Clone, Debug, Default)]
pub struct ScreenLayout {
    pub cells: Vec<Rect>,
    pub keys: Vec<(Key, Rect)>,
    pub suggestions: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, board: &Board, keyboard: &Keyboard) -> ScreenLayout {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(vec![
                Constraint::Length(board.rows() as u16 * CELL_HEIGHT),
                Constraint::Length(keyboard.rows().len() as u16 * KEY_HEIGHT),
                Constraint::Fill(1),
            ])
            .split(area);

        let mut cells = vec![];
        let board_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CELL_HEIGHT); board.rows()])
            .split(rows[0]);
        for row in board_rows.iter() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Length(CELL_WIDTH); board.cols()])
                .flex(layout::Flex::Center)
                .split(*row);
            cells.extend(columns.iter().copied());
        }

        let mut keys = vec![];
        let key_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(KEY_HEIGHT); keyboard.rows().len()])
            .split(rows[1]);
        for (key_row, row_area) in keyboard.rows().iter().zip(key_rows.iter()) {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Length(KEY_WIDTH); key_row.len()])
                .flex(layout::Flex::Center)
                .split(*row_area);
            keys.extend(key_row.iter().copied().zip(columns.iter().copied()));
        }

        ScreenLayout {
            cells,
            keys,
            suggestions: rows[2],
        }
    }

    /// Index of the board cell under the given terminal position.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cells.iter().position(|rect| hit(*rect, column, row))
    }

    /// The keyboard button under the given terminal position.
    pub fn key_at(&self, column: u16, row: u16) -> Option<Key> {
        self.keys
            .iter()
            .find(|(_, rect)| hit(*rect, column, row))
            .map(|(key, _)| *key)
    }
}

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = self.create_border();

        self.render_board(buf);
        self.render_keyboard(buf);
        self.render_suggestions(buf);

        border.render(area, buf);
    }
}

impl App {
    fn create_border(&self) -> Block<'_> {
        let title = Title::from(" Slovobot ".bold());
        let instructions = Title::from(Line::from(vec![
            " Quit ".into(),
            "<Esc> ".blue().bold(),
            " Submit ".into(),
            "<Enter> ".blue().bold(),
            " Cycle color ".into(),
            "<Click> ".blue().bold(),
        ]));
        Block::default()
            .title(title.alignment(Alignment::Center))
            .title(
                instructions
                    .alignment(Alignment::Center)
                    .position(Position::Bottom),
            )
            .borders(Borders::ALL)
            .border_set(symbols::border::PLAIN)
    }

    fn render_board(&self, buf: &mut Buffer) {
        for (index, (cell, cell_area)) in self
            .board
            .cells()
            .iter()
            .zip(self.layout.cells.iter())
            .enumerate()
        {
            render_cell(cell, *cell_area, buf, self.board.current() == Some(index));
        }
    }

    fn render_keyboard(&self, buf: &mut Buffer) {
        for (key, key_area) in &self.layout.keys {
            render_key(*key, *key_area, buf);
        }
    }

    fn render_suggestions(&self, buf: &mut Buffer) {
        let mut lines: Vec<Line<'_>> = vec![Line::from(vec![
            "Suggestions: ".bold(),
            self.suggestions.len().to_string().bold().magenta(),
        ])];
        for word in &self.suggestions {
            lines.push(word.as_str().into());
        }
        Paragraph::new(lines)
            .centered()
            .render(self.layout.suggestions, buf);
    }
}

fn render_cell(cell: &Cell, area: Rect, buf: &mut Buffer, current: bool) {
    let block = match current {
        true => Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
        false => Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(cell.status)),
    };

    let letter = match cell.letter {
        Some(letter) => letter.to_uppercase().to_string(),
        None => "".to_string(),
    };
    Paragraph::new(letter)
        .bold()
        .centered()
        .style(cell_style(cell.status))
        .block(block)
        .render(area, buf);
}

fn render_key(key: Key, area: Rect, buf: &mut Buffer) {
    let style = match key {
        Key::Letter(_) => Style::default(),
        Key::Backspace | Key::Enter => Style::default().blue().bold(),
    };
    Paragraph::new(key.symbol().to_string())
        .centered()
        .style(style)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .render(area, buf);
}

// The original page painted "absent" cells in gray, not true black
fn cell_style(status: StatusColor) -> Style {
    match status {
        StatusColor::White => Style::default(),
        StatusColor::Black => Style::default().bg(Color::DarkGray),
        StatusColor::Yellow => Style::default().bg(Color::LightYellow).fg(Color::Black),
        StatusColor::Green => Style::default()
            .bg(Color::LightGreen)
            .fg(Color::Black)
            .bold(),
    }
}

fn border_style(status: StatusColor) -> Style {
    match status {
        StatusColor::White => Style::default(),
        StatusColor::Black => Style::default().dark_gray(),
        StatusColor::Yellow => Style::default().light_yellow(),
        StatusColor::Green => Style::default().light_green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(
            Rect::new(0, 0, 80, 40),
            &Board::new(5, 5),
            &Keyboard::russian(),
        )
    }

    #[test]
    fn one_rectangle_per_cell_and_key() {
        let layout = layout();
        assert_eq!(layout.cells.len(), 25);
        assert_eq!(layout.keys.len(), 34);
    }

    #[test]
    fn hit_testing_finds_the_drawn_cell() {
        let layout = layout();
        let rect = layout.cells[7];
        assert_eq!(layout.cell_at(rect.x + 1, rect.y + 1), Some(7));
    }

    #[test]
    fn hit_testing_finds_the_drawn_key() {
        let layout = layout();
        let (key, rect) = layout
            .keys
            .iter()
            .find(|(key, _)| *key == Key::Enter)
            .copied()
            .expect("the layout carries an enter key");
        assert_eq!(key, Key::Enter);
        assert_eq!(layout.key_at(rect.x + 1, rect.y + 1), Some(Key::Enter));
    }

    #[test]
    fn the_outer_border_is_nobodys_target() {
        let layout = layout();
        assert_eq!(layout.cell_at(0, 0), None);
        assert_eq!(layout.key_at(0, 0), None);
    }
}
