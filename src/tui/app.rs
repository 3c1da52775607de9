use crate::loader::{LoadConfig, PokedexLoader};
use crate::pokedex::{name_matches, PokemonCard};
use crate::tui::grid::GridState;
use crate::tui::search::SearchState;
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Messages from the background load thread.
///
/// Every message carries the generation of the load that produced it;
/// completions from a superseded load are dropped on receipt.
pub enum BgMessage {
    LoadComplete {
        generation: u64,
        cards: Vec<PokemonCard>,
    },
    LoadFailed {
        generation: u64,
        message: String,
    },
}

pub struct App {
    // Data
    pub cards: Vec<PokemonCard>,
    pub filtered_indices: Vec<usize>,

    // Sub-states
    pub search: SearchState,
    pub grid: GridState,

    // Loading state
    pub is_loading: bool,
    pub status_message: String,

    config: LoadConfig,
    load_generation: u64,

    // Channel
    bg_receiver: Option<Receiver<BgMessage>>,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(config: LoadConfig) -> Self {
        let mut app = Self {
            cards: Vec::new(),
            filtered_indices: Vec::new(),
            search: SearchState::default(),
            grid: GridState::default(),
            is_loading: false,
            status_message: "Ready".to_string(),
            config,
            load_generation: 0,
            bg_receiver: None,
            should_quit: false,
        };

        app.start_load();
        app
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend<Error = std::io::Error>>,
    ) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    self.handle_key(key);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                if self.search.needs_search && !self.is_loading {
                    self.apply_filter();
                    self.search.needs_search = false;
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Number of cards currently visible
    pub fn visible_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Card at a visible-grid position
    pub fn visible_card(&self, position: usize) -> Option<&PokemonCard> {
        self.filtered_indices
            .get(position)
            .and_then(|&idx| self.cards.get(idx))
    }

    fn start_load(&mut self) {
        if self.is_loading {
            return;
        }

        self.load_generation += 1;
        let generation = self.load_generation;
        self.is_loading = true;
        self.status_message = "Loading Pokémon...".to_string();
        self.cards.clear();
        self.filtered_indices.clear();
        self.grid.reset(0);

        let (tx, rx) = channel();
        self.bg_receiver = Some(rx);
        let config = self.config.clone();

        thread::spawn(move || {
            let loader = PokedexLoader::new().with_config(config);
            // Sends fail once the UI has torn down the receiver; the
            // result is then discarded, never applied.
            match loader.load_blocking() {
                Ok(cards) => {
                    let _ = tx.send(BgMessage::LoadComplete { generation, cards });
                }
                Err(e) => {
                    warn!(error = %e, "load failed");
                    let _ = tx.send(BgMessage::LoadFailed {
                        generation,
                        message: e.to_string(),
                    });
                }
            }
        });
    }

    fn process_messages(&mut self) {
        let messages: Vec<BgMessage> = match &self.bg_receiver {
            Some(rx) => rx.try_iter().collect(),
            None => return,
        };

        for msg in messages {
            match msg {
                BgMessage::LoadComplete { generation, cards } => {
                    if generation != self.load_generation {
                        // Stale completion from a superseded load
                        continue;
                    }
                    info!(cards = cards.len(), "canonical list published");
                    self.cards = cards;
                    self.is_loading = false;
                    self.status_message = format!("{} Pokémon loaded", self.cards.len());
                    self.search.needs_search = true;
                }
                BgMessage::LoadFailed {
                    generation,
                    message,
                } => {
                    if generation != self.load_generation {
                        continue;
                    }
                    // All-or-nothing: a failed load publishes an empty list
                    self.cards.clear();
                    self.is_loading = false;
                    self.status_message = format!("Load failed: {}", message);
                    self.search.needs_search = true;
                }
            }
        }
    }

    /// Recompute the visible set from {cards, query}
    fn apply_filter(&mut self) {
        self.filtered_indices = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| name_matches(&card.name, &self.search.query))
            .map(|(idx, _)| idx)
            .collect();

        self.grid.reset(self.filtered_indices.len());
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && !self.search.query.is_empty() {
                    self.search.clear();
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::F(5) => {
                self.start_load();
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_grid_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.search.insert(c),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.cursor_pos = 0,
            KeyCode::End => self.search.cursor_pos = self.search.query.len(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        let total = self.filtered_indices.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.grid.select_up(),
            KeyCode::Down | KeyCode::Char('j') => self.grid.select_down(total),
            KeyCode::Left | KeyCode::Char('h') => self.grid.select_left(),
            KeyCode::Right | KeyCode::Char('l') => self.grid.select_right(total),
            KeyCode::PageUp => self.grid.page_up(),
            KeyCode::PageDown => self.grid.page_down(total),
            KeyCode::Home => self.grid.select_first(),
            KeyCode::End => self.grid.select_last(total),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.insert(c);
                self.search.cursor_pos = self.search.query.len();
            }

            _ => {}
        }
    }
}
