//! Token-aware cursor motion.
//!
//! A [`Seeker`] snapshots the groups on either side of the cursor and walks
//! byte by byte until the group changes. Word jumps, word deletion and
//! Home/End are all built on top of it.

use crate::util::text::{group_at, Group};

/// Direction of a seek
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
}

/// Ephemeral cursor-motion search over a single text.
#[derive(Debug, Clone)]
pub struct Seeker<'a> {
    text: &'a str,
    /// Cursor position the seek started from
    pub start_pos: usize,
    /// Position reached so far
    pub current_pos: usize,
    /// Group of the byte just before `start_pos`
    pub starting_group_to_left: Group,
    /// Reference group: the scan runs while it keeps seeing this group
    pub starting_group_to_right: Group,
}

impl<'a> Seeker<'a> {
    pub fn new(text: &'a str, cursor: usize) -> Self {
        let start_pos = cursor.min(text.len());
        Self {
            text,
            start_pos,
            current_pos: start_pos,
            starting_group_to_left: group_at(text, start_pos as isize - 1),
            starting_group_to_right: group_at(text, start_pos as isize),
        }
    }

    /// The cursor sits inside a run (same group on both sides)
    pub fn same_group(&self) -> bool {
        self.starting_group_to_left == self.starting_group_to_right
    }

    /// Group of the byte the cursor would cross moving in `direction`
    pub fn group_to(&self, direction: Motion) -> Group {
        match direction {
            Motion::Left => group_at(self.text, self.current_pos as isize - 1),
            Motion::Right => group_at(self.text, self.current_pos as isize),
        }
    }

    /// Use `group` as the reference group for subsequent scans
    pub fn retarget(&mut self, group: Group) {
        self.starting_group_to_left = group;
        self.starting_group_to_right = group;
    }

    /// Step in `direction` until the byte at `current_pos ∓ offset` leaves the
    /// reference group. Returns the group found there, or [`Group::None`] when
    /// the buffer edge is reached first.
    pub fn seek_until_different_token(&mut self, direction: Motion, offset: usize) -> Group {
        let reference = self.starting_group_to_right;
        match direction {
            Motion::Left => {
                while self.current_pos >= offset {
                    let group = group_at(self.text, (self.current_pos - offset) as isize);
                    if group != reference {
                        return group;
                    }
                    if self.current_pos == 0 {
                        break;
                    }
                    self.current_pos -= 1;
                }
            }
            Motion::Right => {
                while self.current_pos + offset < self.text.len() {
                    let group = group_at(self.text, (self.current_pos + offset) as isize);
                    if group != reference {
                        return group;
                    }
                    self.current_pos += 1;
                }
            }
        }
        Group::None
    }

    /// Scan including the byte under `current_pos`
    pub fn seek_and_cover_different_token(&mut self, direction: Motion) -> Group {
        self.seek_until_different_token(direction, 0)
    }

    /// Scan stopping just before the differing byte
    pub fn seek_until_right_before_different_token(&mut self, direction: Motion) -> Group {
        self.seek_until_different_token(direction, 1)
    }

    /// Scan until the byte crossed in `direction` is classified as `target`.
    /// Returns false if the buffer edge was reached instead.
    pub fn seek_until_specific_token(&mut self, direction: Motion, target: Group) -> bool {
        loop {
            let group = self.group_to(direction);
            if group == Group::None {
                return false;
            }
            if group == target {
                return true;
            }
            match direction {
                Motion::Left => self.current_pos -= 1,
                Motion::Right => self.current_pos += 1,
            }
        }
    }

    /// Walk to the far edge of the reference group
    fn go_to_edge(&mut self, direction: Motion) {
        match direction {
            Motion::Left => self.seek_until_right_before_different_token(direction),
            Motion::Right => self.seek_and_cover_different_token(direction),
        };
    }
}

/// Word-jump target from `cursor` in `direction`.
///
/// Moving left lands on the start of the previous word, moving right on the
/// end of the next one. A run of spaces is crossed together with the group
/// that follows it.
pub fn seek_token(text: &str, cursor: usize, direction: Motion) -> usize {
    let mut seeker = Seeker::new(text, cursor);

    // At a boundary, moving left scans the group behind the cursor
    if !seeker.same_group() && direction == Motion::Left {
        let behind = seeker.group_to(Motion::Left);
        seeker.retarget(behind);
    }

    seeker.go_to_edge(direction);

    if seeker.starting_group_to_right == Group::Space {
        let next = seeker.group_to(direction);
        seeker.retarget(next);
        seeker.go_to_edge(direction);
    }

    seeker.current_pos
}

/// Start of the line containing `cursor` (just after the previous newline)
pub fn line_start(text: &str, cursor: usize) -> usize {
    let mut seeker = Seeker::new(text, cursor);
    seeker.seek_until_specific_token(Motion::Left, Group::Newline);
    seeker.current_pos
}

/// End of the line containing `cursor` (on the next newline, or the text end)
pub fn line_end(text: &str, cursor: usize) -> usize {
    let mut seeker = Seeker::new(text, cursor);
    seeker.seek_until_specific_token(Motion::Right, Group::Newline);
    seeker.current_pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeker_initial_groups() {
        let seeker = Seeker::new("foo bar", 3);
        assert_eq!(seeker.starting_group_to_left, Group::Normal);
        assert_eq!(seeker.starting_group_to_right, Group::Space);
        assert!(!seeker.same_group());

        let seeker = Seeker::new("foo", 1);
        assert!(seeker.same_group());
    }

    #[test]
    fn test_word_jump_right_skips_space_run() {
        let text = "foo  bar";
        assert_eq!(seek_token(text, 0, Motion::Right), 3);
        assert_eq!(seek_token(text, 3, Motion::Right), 8);
    }

    #[test]
    fn test_word_jump_left_lands_on_word_start() {
        let text = "foo.bar baz";
        assert_eq!(seek_token(text, 11, Motion::Left), 8);
        assert_eq!(seek_token(text, 8, Motion::Left), 4);
        assert_eq!(seek_token(text, 4, Motion::Left), 3);
        assert_eq!(seek_token(text, 3, Motion::Left), 0);
    }

    #[test]
    fn test_word_jump_treats_punctuation_run_as_unit() {
        let text = "a->>b";
        assert_eq!(seek_token(text, 1, Motion::Right), 4);
        assert_eq!(seek_token(text, 4, Motion::Left), 1);
    }

    #[test]
    fn test_word_jump_at_edges_is_noop() {
        assert_eq!(seek_token("abc", 3, Motion::Right), 3);
        assert_eq!(seek_token("abc", 0, Motion::Left), 0);
        assert_eq!(seek_token("", 0, Motion::Left), 0);
        assert_eq!(seek_token("", 0, Motion::Right), 0);
    }

    #[test]
    fn test_word_jump_from_inside_spaces() {
        let text = "foo    bar";
        assert_eq!(seek_token(text, 5, Motion::Right), 10);
        assert_eq!(seek_token(text, 5, Motion::Left), 0);
    }

    #[test]
    fn test_seek_cover_vs_right_before() {
        let mut seeker = Seeker::new("aaab", 0);
        // 'b' is Normal too, so the scan runs off the end
        assert_eq!(seeker.seek_and_cover_different_token(Motion::Right), Group::None);
        assert_eq!(seeker.current_pos, 4);

        let mut seeker = Seeker::new("aa..", 0);
        assert_eq!(seeker.seek_until_right_before_different_token(Motion::Right), Group::Token);
        assert_eq!(seeker.current_pos, 1);
    }

    #[test]
    fn test_seek_until_specific_token() {
        let text = "one\ntwo\nthree";
        let mut seeker = Seeker::new(text, 6);
        assert!(seeker.seek_until_specific_token(Motion::Left, Group::Newline));
        assert_eq!(seeker.current_pos, 4);

        let mut seeker = Seeker::new(text, 9);
        assert!(!seeker.seek_until_specific_token(Motion::Right, Group::Newline));
        assert_eq!(seeker.current_pos, text.len());
    }

    #[test]
    fn test_line_start_and_end() {
        let text = "one\ntwo\nthree";
        assert_eq!(line_start(text, 6), 4);
        assert_eq!(line_end(text, 6), 7);
        assert_eq!(line_start(text, 2), 0);
        assert_eq!(line_end(text, 10), 13);
        // Already on the boundary
        assert_eq!(line_start(text, 4), 4);
        assert_eq!(line_end(text, 7), 7);
    }
}
