use crate::chat::{format_league_reply, ChatMessage};
use crate::config::{AppConfig, ModelVariant};
use crate::errors::{BetError, FetchStage};
use crate::predictions::LeagueCard;
use crate::sports::League;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// Results delivered by spawned gateway tasks, drained once per frame.
#[derive(Debug, Clone)]
pub enum AsyncAction {
    AllLeaguesLoaded(Vec<LeagueCard>),
    LeagueLoaded(LeagueCard),
    ChatPicks(LeagueCard),   // league-routed chat: card plus transcript reply
    ChatAnswer(String),      // free-form chat reply
    LoadingMessage(String),
    Error(BetError),
}

/// Gateway work requested by a key press. The caller owns the runtime and
/// the channel, so key handling stays synchronous and testable.
#[derive(Debug, Clone, PartialEq)]
pub enum UiRequest {
    FetchAll,
    FetchLeague(League),
    Chat(String),
}

#[derive(PartialEq, Debug, Clone)]
pub enum CurrentScreen {
    Dashboard, // Leagues, prediction board, chat
    Settings,  // Model variant selection
}

#[derive(PartialEq, Debug)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Pane {
    Leagues,
    Board,
    Chat,
}

pub struct App {
    pub config: AppConfig,
    pub current_screen: CurrentScreen,
    pub input_mode: InputMode,
    pub active_pane: Pane,
    pub should_quit: bool,
    pub is_loading: bool,
    pub loading_tick: u64,
    pub loading_message: Option<String>,
    pub cached_user_timezone: String,

    // League sidebar
    pub selected_league_index: usize,
    pub league_list_state: ListState,

    // Prediction board
    pub cards: Vec<LeagueCard>,
    pub board_scroll: u16,

    // Chat
    pub chat_input: Input,
    pub chat_messages: Vec<ChatMessage>,
    pub chat_scroll: u16,

    // Settings
    pub selected_model_index: usize,
    pub model_list_state: ListState,

    // Popups
    pub show_help: bool,
    pub gateway_error: Option<BetError>,
    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> App {
        let config = AppConfig::load().unwrap_or_default();

        let mut league_list_state = ListState::default();
        league_list_state.select(Some(0));

        let selected_model_index = ModelVariant::all()
            .iter()
            .position(|m| *m == config.model)
            .unwrap_or(0);
        let mut model_list_state = ListState::default();
        model_list_state.select(Some(selected_model_index));

        App {
            cached_user_timezone: config.get_user_timezone(),
            config,
            current_screen: CurrentScreen::Dashboard,
            input_mode: InputMode::Normal,
            active_pane: Pane::Leagues,
            should_quit: false,
            is_loading: false,
            loading_tick: 0,
            loading_message: None,

            selected_league_index: 0,
            league_list_state,

            cards: Vec::new(),
            board_scroll: 0,

            chat_input: Input::default(),
            chat_messages: Vec::new(),
            chat_scroll: 0,

            selected_model_index,
            model_list_state,

            show_help: false,
            gateway_error: None,
            status_message: None,
        }
    }

    pub fn selected_league(&self) -> League {
        League::all()
            .get(self.selected_league_index)
            .copied()
            .unwrap_or(League::Nfl)
    }

    pub fn card_for(&self, league: League) -> Option<&LeagueCard> {
        self.cards.iter().find(|card| card.league == league)
    }

    /// Replace the card for a league, or insert it keeping sidebar order.
    pub fn upsert_card(&mut self, card: LeagueCard) {
        if let Some(existing) = self
            .cards
            .iter_mut()
            .find(|existing| existing.league == card.league)
        {
            *existing = card;
        } else {
            self.cards.push(card);
            self.cards
                .sort_by_key(|c| League::all().iter().position(|l| *l == c.league));
        }
    }

    pub fn toggle_input_mode(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Normal => InputMode::Editing,
            InputMode::Editing => InputMode::Normal,
        };
    }

    pub fn on_tick(&mut self) {
        self.loading_tick = self.loading_tick.wrapping_add(1);
    }

    fn navigate_list(
        len: usize,
        current_index: &mut usize,
        list_state: &mut ListState,
        forward: bool,
    ) {
        if len == 0 {
            return;
        }
        let i = match list_state.selected() {
            Some(i) => {
                if forward {
                    (i + 1) % len
                } else if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        *current_index = i;
        list_state.select(Some(i));
    }

    /// j/k and the arrow keys act on whichever pane holds focus. Changing
    /// the league selection swaps the board's card, so its scroll resets.
    fn scroll_down(&mut self) {
        match self.active_pane {
            Pane::Leagues => {
                self.next_league();
                self.board_scroll = 0;
            }
            Pane::Board => self.board_scroll = self.board_scroll.saturating_add(1),
            Pane::Chat => self.chat_scroll = self.chat_scroll.saturating_add(1),
        }
    }

    fn scroll_up(&mut self) {
        match self.active_pane {
            Pane::Leagues => {
                self.previous_league();
                self.board_scroll = 0;
            }
            Pane::Board => self.board_scroll = self.board_scroll.saturating_sub(1),
            Pane::Chat => self.chat_scroll = self.chat_scroll.saturating_sub(1),
        }
    }

    pub fn next_league(&mut self) {
        Self::navigate_list(
            League::all().len(),
            &mut self.selected_league_index,
            &mut self.league_list_state,
            true,
        );
    }

    pub fn previous_league(&mut self) {
        Self::navigate_list(
            League::all().len(),
            &mut self.selected_league_index,
            &mut self.league_list_state,
            false,
        );
    }

    pub fn next_model(&mut self) {
        Self::navigate_list(
            ModelVariant::all().len(),
            &mut self.selected_model_index,
            &mut self.model_list_state,
            true,
        );
    }

    pub fn previous_model(&mut self) {
        Self::navigate_list(
            ModelVariant::all().len(),
            &mut self.selected_model_index,
            &mut self.model_list_state,
            false,
        );
    }

    pub fn apply_selected_model(&mut self) {
        if let Some(variant) = ModelVariant::all().get(self.selected_model_index).copied() {
            self.config.set_model(variant);
            self.status_message = Some(format!("Model set to {}", variant.display_name()));
        }
    }

    /// Copy the selected league's picks as chat-style text.
    pub fn copy_selected_card(&mut self) {
        let league = self.selected_league();
        let text = self.card_for(league).map(format_league_reply);
        match text {
            Some(text) => match arboard::Clipboard::new() {
                Ok(mut clipboard) => match clipboard.set_text(text) {
                    Ok(()) => {
                        self.status_message =
                            Some(format!("{} picks copied to clipboard", league.display_name()));
                    }
                    Err(e) => {
                        self.status_message = Some(format!("Clipboard error: {}", e));
                    }
                },
                Err(e) => {
                    self.status_message = Some(format!("Clipboard unavailable: {}", e));
                }
            },
            None => {
                self.status_message =
                    Some(format!("No {} picks fetched yet", league.display_name()));
            }
        }
    }

    /// Apply one drained action to session state.
    pub fn apply_action(&mut self, action: AsyncAction) {
        match action {
            AsyncAction::AllLeaguesLoaded(cards) => {
                self.cards = cards;
                self.board_scroll = 0;
                self.finish_loading();
            }
            AsyncAction::LeagueLoaded(card) => {
                self.upsert_card(card);
                self.board_scroll = 0;
                self.finish_loading();
            }
            AsyncAction::ChatPicks(card) => {
                let reply = format_league_reply(&card);
                self.upsert_card(card);
                self.push_assistant(reply);
                self.finish_loading();
            }
            AsyncAction::ChatAnswer(text) => {
                self.push_assistant(text);
                self.finish_loading();
            }
            AsyncAction::LoadingMessage(message) => {
                self.loading_message = Some(message);
            }
            AsyncAction::Error(err) => {
                // Keep whatever was fetched before, just surface the popup.
                self.finish_loading();
                self.gateway_error = Some(err);
            }
        }
    }

    fn finish_loading(&mut self) {
        self.is_loading = false;
        self.loading_message = None;
    }

    fn push_assistant(&mut self, text: String) {
        self.chat_messages.push(ChatMessage::assistant(text));
        // Sentinel: the chat pane clamps this to its bottom line on render.
        self.chat_scroll = u16::MAX;
    }

    /// Handles a key event and returns optional gateway work to spawn.
    /// This allows testing the logic without running the full TUI.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<UiRequest> {
        self.status_message = None;

        // Popups swallow input until dismissed
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return None;
        }
        if self.gateway_error.is_some() {
            if key.code == KeyCode::Esc {
                self.gateway_error = None;
            }
            return None;
        }

        if self.input_mode == InputMode::Editing {
            return self.handle_editing_key(key);
        }

        // Global
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return None;
            }
            _ => {}
        }

        match self.current_screen {
            CurrentScreen::Dashboard => self.handle_dashboard_key(key),
            CurrentScreen::Settings => {
                self.handle_settings_key(key);
                None
            }
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> Option<UiRequest> {
        match key.code {
            KeyCode::Tab => {
                self.active_pane = match self.active_pane {
                    Pane::Leagues => Pane::Board,
                    Pane::Board => Pane::Chat,
                    Pane::Chat => Pane::Leagues,
                };
                None
            }
            KeyCode::BackTab => {
                self.active_pane = match self.active_pane {
                    Pane::Leagues => Pane::Chat,
                    Pane::Board => Pane::Leagues,
                    Pane::Chat => Pane::Board,
                };
                None
            }
            KeyCode::Char('s') => {
                self.selected_model_index = ModelVariant::all()
                    .iter()
                    .position(|m| *m == self.config.model)
                    .unwrap_or(0);
                self.model_list_state.select(Some(self.selected_model_index));
                self.current_screen = CurrentScreen::Settings;
                None
            }
            KeyCode::Char('f') => self.request_fetch_all(),
            KeyCode::Char('i') => {
                self.active_pane = Pane::Chat;
                self.input_mode = InputMode::Editing;
                None
            }
            KeyCode::Char('y') => {
                self.copy_selected_card();
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_down();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_up();
                None
            }
            KeyCode::Enter => match self.active_pane {
                Pane::Leagues => self.request_fetch_league(),
                Pane::Chat => {
                    self.input_mode = InputMode::Editing;
                    None
                }
                Pane::Board => None,
            },
            _ => None,
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('s') => {
                self.current_screen = CurrentScreen::Dashboard;
            }
            KeyCode::Char('j') | KeyCode::Down => self.next_model(),
            KeyCode::Char('k') | KeyCode::Up => self.previous_model(),
            KeyCode::Enter => self.apply_selected_model(),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<UiRequest> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                None
            }
            KeyCode::Enter => self.submit_chat_message(),
            KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Ok(mut clipboard) = arboard::Clipboard::new() {
                    if let Ok(text) = clipboard.get_text() {
                        let current = self.chat_input.value().to_string();
                        self.chat_input = Input::new(current + &text);
                    }
                }
                None
            }
            _ => {
                self.chat_input.handle_event(&Event::Key(key));
                None
            }
        }
    }

    fn request_fetch_all(&mut self) -> Option<UiRequest> {
        if self.is_loading {
            return None;
        }
        self.is_loading = true;
        self.loading_message = Some(FetchStage::Connecting.display_name());
        Some(UiRequest::FetchAll)
    }

    fn request_fetch_league(&mut self) -> Option<UiRequest> {
        if self.is_loading {
            return None;
        }
        let league = self.selected_league();
        self.is_loading = true;
        self.loading_message = Some(FetchStage::FindingGames(league).display_name());
        Some(UiRequest::FetchLeague(league))
    }

    fn submit_chat_message(&mut self) -> Option<UiRequest> {
        if self.is_loading {
            return None;
        }
        let text = self.chat_input.value().trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.chat_input = Input::default();
        self.input_mode = InputMode::Normal;
        self.chat_messages.push(ChatMessage::user(text.clone()));
        self.chat_scroll = u16::MAX;
        self.is_loading = true;
        self.loading_message = Some("Asking the model".to_string());
        Some(UiRequest::Chat(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Role;
    use crate::predictions::assemble_card;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn sample_card(league: League) -> LeagueCard {
        assemble_card(
            league,
            vec!["Team A at Team B - 2025-01-01".to_string()],
            vec!["Team B".to_string()],
            vec!["Home edge.".to_string()],
        )
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new();
        app.handle_key_event(make_key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_cycles_panes() {
        let mut app = App::new();
        assert_eq!(app.active_pane, Pane::Leagues);
        app.handle_key_event(make_key(KeyCode::Tab));
        assert_eq!(app.active_pane, Pane::Board);
        app.handle_key_event(make_key(KeyCode::Tab));
        assert_eq!(app.active_pane, Pane::Chat);
        app.handle_key_event(make_key(KeyCode::Tab));
        assert_eq!(app.active_pane, Pane::Leagues);
        app.handle_key_event(make_key(KeyCode::BackTab));
        assert_eq!(app.active_pane, Pane::Chat);
    }

    #[test]
    fn test_fetch_all_request() {
        let mut app = App::new();
        let request = app.handle_key_event(make_key(KeyCode::Char('f')));
        assert_eq!(request, Some(UiRequest::FetchAll));
        assert!(app.is_loading);
        assert!(app.loading_message.is_some());

        // A second press while loading is ignored
        let request = app.handle_key_event(make_key(KeyCode::Char('f')));
        assert_eq!(request, None);
    }

    #[test]
    fn test_league_navigation_and_fetch() {
        let mut app = App::new();
        app.handle_key_event(make_key(KeyCode::Char('j')));
        assert_eq!(app.selected_league(), League::Nba);
        app.handle_key_event(make_key(KeyCode::Char('j')));
        assert_eq!(app.selected_league(), League::Mlb);
        app.handle_key_event(make_key(KeyCode::Char('j')));
        assert_eq!(app.selected_league(), League::Nfl, "wraps around");

        app.handle_key_event(make_key(KeyCode::Char('k')));
        assert_eq!(app.selected_league(), League::Mlb);

        let request = app.handle_key_event(make_key(KeyCode::Enter));
        assert_eq!(request, Some(UiRequest::FetchLeague(League::Mlb)));
        assert!(app.is_loading);
    }

    #[test]
    fn test_chat_submit_flow() {
        let mut app = App::new();
        app.handle_key_event(make_key(KeyCode::Char('i')));
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.active_pane, Pane::Chat);

        for c in "nba picks".chars() {
            app.handle_key_event(make_key(KeyCode::Char(c)));
        }
        assert_eq!(app.chat_input.value(), "nba picks");

        let request = app.handle_key_event(make_key(KeyCode::Enter));
        assert_eq!(request, Some(UiRequest::Chat("nba picks".to_string())));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.chat_input.value(), "");
        assert_eq!(app.chat_messages.len(), 1);
        assert_eq!(app.chat_messages[0].role, Role::User);
        assert!(app.is_loading);
    }

    #[test]
    fn test_empty_chat_submit_is_ignored() {
        let mut app = App::new();
        app.handle_key_event(make_key(KeyCode::Char('i')));
        let request = app.handle_key_event(make_key(KeyCode::Enter));
        assert_eq!(request, None);
        assert!(app.chat_messages.is_empty());
        assert!(!app.is_loading);
    }

    #[test]
    fn test_editing_mode_keeps_q_as_text() {
        let mut app = App::new();
        app.handle_key_event(make_key(KeyCode::Char('i')));
        app.handle_key_event(make_key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.chat_input.value(), "q");
    }

    #[test]
    fn test_apply_all_leagues_loaded() {
        let mut app = App::new();
        app.is_loading = true;
        app.apply_action(AsyncAction::AllLeaguesLoaded(vec![
            sample_card(League::Nfl),
            sample_card(League::Nba),
            sample_card(League::Mlb),
        ]));
        assert_eq!(app.cards.len(), 3);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_upsert_keeps_league_order() {
        let mut app = App::new();
        app.upsert_card(sample_card(League::Mlb));
        app.upsert_card(sample_card(League::Nfl));
        assert_eq!(app.cards[0].league, League::Nfl);
        assert_eq!(app.cards[1].league, League::Mlb);

        // Replacing does not duplicate
        app.upsert_card(sample_card(League::Nfl));
        assert_eq!(app.cards.len(), 2);
    }

    #[test]
    fn test_apply_chat_picks_upserts_and_replies() {
        let mut app = App::new();
        app.is_loading = true;
        app.apply_action(AsyncAction::ChatPicks(sample_card(League::Nba)));
        assert_eq!(app.cards.len(), 1);
        assert_eq!(app.chat_messages.len(), 1);
        assert_eq!(app.chat_messages[0].role, Role::Assistant);
        assert!(app.chat_messages[0].content.starts_with("NBA BestBets:"));
    }

    #[test]
    fn test_error_preserves_cards() {
        let mut app = App::new();
        app.apply_action(AsyncAction::AllLeaguesLoaded(vec![sample_card(
            League::Nfl,
        )]));
        app.is_loading = true;
        app.apply_action(AsyncAction::Error(BetError::RateLimited(
            "quota hit".to_string(),
        )));
        assert!(app.gateway_error.is_some());
        assert!(!app.is_loading);
        assert_eq!(app.cards.len(), 1, "prior results survive a failed call");

        // Only Esc dismisses; other keys are swallowed
        let request = app.handle_key_event(make_key(KeyCode::Char('f')));
        assert_eq!(request, None);
        assert!(app.gateway_error.is_some());
        app.handle_key_event(make_key(KeyCode::Esc));
        assert!(app.gateway_error.is_none());
    }

    #[test]
    fn test_help_popup_toggle() {
        let mut app = App::new();
        app.handle_key_event(make_key(KeyCode::Char('?')));
        assert!(app.show_help);
        let request = app.handle_key_event(make_key(KeyCode::Char('f')));
        assert_eq!(request, None, "help popup swallows keys");
        app.handle_key_event(make_key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_settings_screen_model_selection() {
        let mut app = App::new();
        app.handle_key_event(make_key(KeyCode::Char('s')));
        assert_eq!(app.current_screen, CurrentScreen::Settings);

        let start = app.selected_model_index;
        app.handle_key_event(make_key(KeyCode::Char('j')));
        assert_ne!(app.selected_model_index, start);

        app.handle_key_event(make_key(KeyCode::Enter));
        assert_eq!(
            app.config.model,
            ModelVariant::all()[app.selected_model_index]
        );

        app.handle_key_event(make_key(KeyCode::Esc));
        assert_eq!(app.current_screen, CurrentScreen::Dashboard);
    }

    #[test]
    fn test_loading_message_action() {
        let mut app = App::new();
        app.is_loading = true;
        app.apply_action(AsyncAction::LoadingMessage("Picking NBA winners".to_string()));
        assert!(app.is_loading, "progress text does not end the fetch");
        assert_eq!(
            app.loading_message.as_deref(),
            Some("Picking NBA winners")
        );
    }
}
