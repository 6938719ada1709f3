//! The Rummy rules engine.
//!
//! ## Game flow
//!
//! Setup shuffles a standard 52-card deck with the seeded RNG, deals ten
//! cards to each of 2-4 players round-robin, and flips one card to start
//! the discard pile. The rest becomes the face-down stock.
//!
//! On their turn a player draws (from the stock or anywhere in the discard
//! pile), optionally lays down melds, and discards to end the turn. Play
//! rotates in seat order. Emptying your hand ends the game: every player
//! is scored as meld points minus points left in hand, and the highest
//! score wins.
//!
//! All player actions verify turn ownership; every transition appends an
//! event to the public log.

use crate::core::{standard_deck, Card, GameError, GameRng, PlayerId, PlayerMap};

use super::event::{EventLog, GameEvent};
use super::meld::{Meld, MeldKind};
use super::scoring::{player_score, Standing};

/// Cards dealt to each player at setup.
pub const HAND_SIZE: usize = 10;

/// Seats at the table, inclusive bounds.
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Builder for a [`RummyGame`].
///
/// Defaults: 2 players named "Player 1".. , seed 0, freshly shuffled deck.
/// A prepared deck can be supplied for deterministic setups; it is dealt
/// as-is, drawing from the end.
pub struct GameBuilder {
    player_count: usize,
    names: Option<Vec<String>>,
    seed: u64,
    deck: Option<Vec<Card>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            names: None,
            seed: 0,
            deck: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Seat names in order. The list length must match the player count.
    pub fn names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a prepared deck instead of shuffling. Cards are drawn from the
    /// end of the vec.
    pub fn deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Validate the configuration and deal the game.
    pub fn build(self) -> Result<RummyGame, GameError> {
        let count = self.player_count;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::PlayerCount { count });
        }

        let names = match self.names {
            Some(names) => {
                if names.len() != count {
                    return Err(GameError::NameCount {
                        names: names.len(),
                        players: count,
                    });
                }
                if names.iter().any(|n| n.trim().is_empty()) {
                    return Err(GameError::EmptyName);
                }
                names
            }
            None => (1..=count).map(|i| format!("Player {}", i)).collect(),
        };

        let mut rng = GameRng::new(self.seed);
        let mut stock = match self.deck {
            Some(deck) => deck,
            None => {
                let mut deck = standard_deck();
                rng.shuffle(&mut deck);
                deck
            }
        };

        // Ten per player plus the card that opens the discard pile.
        if stock.len() < HAND_SIZE * count + 1 {
            return Err(GameError::DeckTooSmall {
                got: stock.len(),
                players: count,
            });
        }

        let mut hands: PlayerMap<Vec<Card>> = PlayerMap::with_default(count);
        for _ in 0..HAND_SIZE {
            for player in PlayerId::all(count) {
                if let Some(card) = stock.pop() {
                    hands[player].push(card);
                }
            }
        }

        let mut discards = Vec::new();
        if let Some(card) = stock.pop() {
            discards.push(card);
        }

        let mut events = EventLog::new();
        events.push(GameEvent::GameStarted {
            player_names: names.clone(),
        });
        events.push(GameEvent::TurnStarted {
            player: PlayerId::new(0),
            name: names[0].clone(),
        });

        Ok(RummyGame {
            player_names: names,
            hands,
            melds: PlayerMap::with_default(count),
            stock,
            discards,
            active_player: PlayerId::new(0),
            scores: PlayerMap::with_value(count, 0),
            winner: None,
            game_over: false,
            events,
            rng,
        })
    }
}

/// One game of Rummy: hands, melds, stock, discard pile, and turn state.
#[derive(Clone, Debug)]
pub struct RummyGame {
    player_names: Vec<String>,
    hands: PlayerMap<Vec<Card>>,
    melds: PlayerMap<Vec<Meld>>,
    /// Face-down stock; top is the end of the vec.
    stock: Vec<Card>,
    /// Face-up discard pile; top is the end of the vec.
    discards: Vec<Card>,
    active_player: PlayerId,
    scores: PlayerMap<i64>,
    winner: Option<PlayerId>,
    game_over: bool,
    events: EventLog,
    rng: GameRng,
}

impl RummyGame {
    /// Start a game with default seat names ("Player 1", ...).
    pub fn new(player_count: usize, seed: u64) -> Result<Self, GameError> {
        GameBuilder::new().player_count(player_count).seed(seed).build()
    }

    /// Builder for customized setups.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    // === Actions ===

    /// Draw the top card of the stock into `player`'s hand.
    pub fn draw_from_stock(&mut self, player: PlayerId) -> Result<Card, GameError> {
        self.ensure_turn(player)?;

        let card = self.stock.pop().ok_or(GameError::StockEmpty)?;
        self.hands[player].push(card);
        self.events.push(GameEvent::DrewFromStock {
            player,
            name: self.player_names[player.index()].clone(),
        });
        Ok(card)
    }

    /// Take a specific card out of the discard pile into `player`'s hand.
    ///
    /// The card may sit anywhere in the pile, not just on top.
    pub fn draw_from_discard(&mut self, player: PlayerId, card: Card) -> Result<Card, GameError> {
        self.ensure_turn(player)?;

        let pos = self
            .discards
            .iter()
            .position(|&c| c == card)
            .ok_or(GameError::CardNotInDiscard(card))?;
        let card = self.discards.remove(pos);
        self.hands[player].push(card);
        self.events.push(GameEvent::DrewFromDiscard {
            player,
            name: self.player_names[player.index()].clone(),
            card,
        });
        Ok(card)
    }

    /// Lay down a meld from `player`'s hand.
    ///
    /// Every card must be in the hand and the cards must form a valid meld
    /// of the given kind. Emptying the hand ends the game.
    pub fn play_meld(
        &mut self,
        player: PlayerId,
        cards: &[Card],
        kind: MeldKind,
    ) -> Result<(), GameError> {
        self.ensure_turn(player)?;

        let meld = Meld::new(cards, kind)?;

        // Verify hand ownership against a scratch copy so a duplicate card
        // in the request cannot double-spend a single copy in the hand.
        let mut remaining = self.hands[player].clone();
        for &card in cards {
            let pos = remaining
                .iter()
                .position(|&c| c == card)
                .ok_or(GameError::CardNotInHand(card))?;
            remaining.remove(pos);
        }
        self.hands[player] = remaining;

        self.events.push(GameEvent::MeldPlayed {
            player,
            name: self.player_names[player.index()].clone(),
            kind,
            cards: meld.cards().to_vec(),
        });
        self.melds[player].push(meld);

        if self.hands[player].is_empty() {
            self.end_game();
        }

        Ok(())
    }

    /// Discard a card from `player`'s hand, ending their turn.
    ///
    /// If the discard empties the hand the game ends instead of the turn
    /// passing.
    pub fn discard(&mut self, player: PlayerId, card: Card) -> Result<(), GameError> {
        self.ensure_turn(player)?;

        let pos = self.hands[player]
            .iter()
            .position(|&c| c == card)
            .ok_or(GameError::CardNotInHand(card))?;
        self.hands[player].remove(pos);
        self.discards.push(card);
        self.events.push(GameEvent::Discarded {
            player,
            name: self.player_names[player.index()].clone(),
            card,
        });

        if self.hands[player].is_empty() {
            self.end_game();
        } else {
            self.advance_turn();
        }

        Ok(())
    }

    // === Accessors ===

    /// A player's hand, in draw order.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    /// Hand sizes for every seat, seat order.
    #[must_use]
    pub fn hand_sizes(&self) -> Vec<usize> {
        self.hands.iter().map(|(_, h)| h.len()).collect()
    }

    /// Melds a player has laid down.
    #[must_use]
    pub fn melds(&self, player: PlayerId) -> &[Meld] {
        &self.melds[player]
    }

    /// Cards left in the face-down stock.
    #[must_use]
    pub fn stock_size(&self) -> usize {
        self.stock.len()
    }

    /// The discard pile, bottom first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discards
    }

    /// The top card of the discard pile, if any.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discards.last().copied()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Name of the player whose turn it is.
    #[must_use]
    pub fn active_player_name(&self) -> &str {
        &self.player_names[self.active_player.index()]
    }

    /// A player's seat name.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.player_names[player.index()]
    }

    /// All seat names in order.
    #[must_use]
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// A player's score. Zero until the game ends.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        self.scores[player]
    }

    /// The public event log.
    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The seed the deal was shuffled with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Final results sorted by score descending, or `None` while the game
    /// is still running.
    #[must_use]
    pub fn final_standings(&self) -> Option<Vec<Standing>> {
        if !self.game_over {
            return None;
        }

        let mut standings: Vec<Standing> = self
            .scores
            .iter()
            .map(|(player, &score)| Standing {
                player,
                name: self.player_names[player.index()].clone(),
                score,
                winner: self.winner == Some(player),
            })
            .collect();

        standings.sort_by(|a, b| b.score.cmp(&a.score));
        Some(standings)
    }

    // === Internals ===

    fn ensure_turn(&self, player: PlayerId) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        if player.index() >= self.player_count() {
            return Err(GameError::UnknownPlayer(player));
        }
        if player != self.active_player {
            return Err(GameError::NotYourTurn(player));
        }
        Ok(())
    }

    fn advance_turn(&mut self) {
        self.active_player = self.active_player.next(self.player_count());
        self.events.push(GameEvent::TurnStarted {
            player: self.active_player,
            name: self.player_names[self.active_player.index()].clone(),
        });
    }

    fn end_game(&mut self) {
        self.game_over = true;

        for player in PlayerId::all(self.player_count()) {
            self.scores[player] = player_score(&self.melds[player], &self.hands[player]);
        }

        // Highest score wins; ties go to the earlier seat.
        let winner = self
            .scores
            .iter()
            .max_by_key(|&(player, &score)| (score, std::cmp::Reverse(player.index())))
            .map(|(player, _)| player)
            .unwrap_or(PlayerId::new(0));

        self.winner = Some(winner);
        self.events.push(GameEvent::GameEnded {
            winner,
            name: self.player_names[winner.index()].clone(),
            score: self.scores[winner],
        });
    }
}
