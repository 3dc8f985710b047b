//! Corpus ordering and window selection.
//!
//! # Examples
//!
//! ```
//! use chatheart::Message;
//! use chatheart::config::{OrderPolicy, SelectionPolicy};
//! use chatheart::core::select::{order_messages, select_window};
//!
//! let corpus = vec![
//!     Message::new("2/1/24", "10:00", "David", "second day"),
//!     Message::new("1/1/24", "10:00", "Andrea", "first"),
//! ];
//! let mut rng = rand::thread_rng();
//! let ordered = order_messages(&corpus, OrderPolicy::Date, &mut rng);
//! assert_eq!(ordered[0].sender, "Andrea");
//!
//! let window = select_window(&ordered, SelectionPolicy::Wrap, 1, 3);
//! let senders: Vec<&str> = window.iter().map(|m| m.sender.as_str()).collect();
//! assert_eq!(senders, vec!["David", "Andrea", "David"]);
//! ```

use rand::Rng;
use rand::seq::SliceRandom;

use crate::Message;
use crate::config::{OrderPolicy, SelectionPolicy};

/// Returns a copy of `messages` in the requested order.
///
/// - [`OrderPolicy::Length`]: stable, ascending character count.
/// - [`OrderPolicy::Date`]: stable, ascending timestamp; messages whose date
///   or time can't be interpreted keep their relative order after all the
///   dated ones.
/// - [`OrderPolicy::Random`]: Fisher–Yates shuffle driven by `rng`.
/// - [`OrderPolicy::None`]: parse order.
pub fn order_messages<R: Rng + ?Sized>(
    messages: &[Message],
    policy: OrderPolicy,
    rng: &mut R,
) -> Vec<Message> {
    let mut ordered = messages.to_vec();
    match policy {
        OrderPolicy::None => {}
        OrderPolicy::Length => ordered.sort_by_key(Message::text_len),
        OrderPolicy::Date => ordered.sort_by_cached_key(|m| {
            let ts = m.timestamp();
            (ts.is_none(), ts)
        }),
        OrderPolicy::Random => ordered.shuffle(rng),
    }
    ordered
}

/// Takes `size` messages starting at `start` from the ordered corpus.
///
/// - [`SelectionPolicy::Clamped`]: `start` is clamped to the last index and
///   the window stops at the end, giving `min(size, len - start)` messages.
/// - [`SelectionPolicy::Wrap`]: index `(start + i) % len` for `i < size`,
///   giving exactly `size` messages. Callers bound `size`, see
///   [`MAX_WRAP_SIZE`](crate::config::MAX_WRAP_SIZE).
///
/// An empty corpus always yields an empty window.
pub fn select_window(
    ordered: &[Message],
    policy: SelectionPolicy,
    start: usize,
    size: usize,
) -> Vec<Message> {
    let total = ordered.len();
    if total == 0 || size == 0 {
        return Vec::new();
    }

    match policy {
        SelectionPolicy::Clamped => {
            let start = start.min(total - 1);
            let end = start.saturating_add(size).min(total);
            ordered[start..end].to_vec()
        }
        SelectionPolicy::Wrap => {
            let start = start % total;
            (0..size)
                .map(|i| ordered[(start + i % total) % total].clone())
                .collect()
        }
    }
}
