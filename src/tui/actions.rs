use super::*;
use crate::board::GuessBatch;
use crate::keyboard::Key;

pub enum Action {
    Exit,
    Press(Key),
    Click(u16, u16),
    FetchSuggestions(GuessBatch),
    ShowSuggestions(Vec<String>),
}

impl App {
    pub fn update(&mut self, msg: Option<Action>) {
        if let Some(msg) = msg {
            match msg {
                Action::Exit => {
                    self.token.cancel();
                    self.exit = true;
                }
                Action::Press(Key::Letter(letter)) => {
                    self.board.fill(letter);
                }
                Action::Press(Key::Backspace) => {
                    log::debug!("backspace pressed");
                    self.suggestions.clear();
                    self.board.backspace();
                }
                Action::Press(Key::Enter) => {
                    log::debug!("enter pressed");
                    self.suggestions.clear();
                    let batch = self.board.collect();
                    if !batch.is_empty() {
                        log::debug!("submitting {:?}", batch.entries());
                        self.action_tx
                            .send(Some(Action::FetchSuggestions(batch)))
                            .unwrap();
                    }
                }
                Action::Click(column, row) => {
                    if let Some(cell) = self.layout.cell_at(column, row) {
                        self.board.cycle_status(cell);
                    } else if let Some(key) = self.layout.key_at(column, row) {
                        self.update(Some(Action::Press(key)));
                    }
                }
                Action::FetchSuggestions(batch) => {
                    let client = self.client.clone();
                    let tx = self.action_tx.clone();

                    // A new submission supersedes whatever is still in
                    // flight; the old task's token is cancelled so a
                    // stale response never reaches the panel.
                    if let Some(token) = self.child_token.take() {
                        token.cancel();
                    }

                    let child = self.token.child_token();
                    let child_clone = child.clone();
                    self.child_token = Some(child.clone());

                    tokio::spawn(async move {
                        let fetched = tokio::select! {
                            biased;
                            _ = child_clone.cancelled() => {
                                None
                            }
                            result = client.fetch(&batch) => {
                                Some(result)
                            }
                        };
                        if !child.is_cancelled() {
                            match fetched {
                                Some(Ok(words)) => {
                                    let _ = tx.send(Some(Action::ShowSuggestions(words)));
                                }
                                Some(Err(error)) => {
                                    log::error!("suggestion request failed: {error:#}");
                                }
                                None => {}
                            }
                        }
                    });
                }
                Action::ShowSuggestions(words) => {
                    self.suggestions = words;
                }
            }
        }
    }
}
