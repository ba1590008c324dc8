use crate::{event::Number, tokenizer::Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LiteralKind {
    Null,
    True,
    False,
    NaN,
    Infinity,
    NegativeInfinity,
}

/// What happened after feeding one more character into the literal matcher?
pub(crate) enum LiteralStep {
    /// Character matched, but the literal is not finished yet.
    NeedMore,
    /// Character matched *and* it was the last byte of the literal.
    Done(Token),
    /// Character did **not** match the expected byte.
    Reject,
}

/// `None` means no literal is in flight; `Some` holds the remaining bytes and
/// the token the literal stands for while matching.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct LiteralMatcher(Option<(&'static [u8], LiteralKind)>);

impl LiteralMatcher {
    /// No literal is in flight.
    pub(crate) fn none() -> Self {
        LiteralMatcher(None)
    }

    /// Start matching after the *first* character. `N` and `I` are only
    /// routed here when the non-finite extension is enabled.
    pub(crate) fn new(first: char) -> Self {
        match first {
            'n' => LiteralMatcher(Some((b"ull", LiteralKind::Null))),
            't' => LiteralMatcher(Some((b"rue", LiteralKind::True))),
            'f' => LiteralMatcher(Some((b"alse", LiteralKind::False))),
            'N' => LiteralMatcher(Some((b"aN", LiteralKind::NaN))),
            'I' => LiteralMatcher(Some((b"nfinity", LiteralKind::Infinity))),
            _ => LiteralMatcher::none(),
        }
    }

    /// Start matching `Infinity` whose leading `I` followed a minus sign.
    pub(crate) fn negative_infinity() -> Self {
        LiteralMatcher(Some((b"nfinity", LiteralKind::NegativeInfinity)))
    }

    /// Give the matcher the next input character and learn what to do next.
    pub(crate) fn step(&mut self, c: char) -> LiteralStep {
        // Not in the middle of a literal, so any char is a reject
        let Some((bytes, kind)) = self.0.take() else {
            return LiteralStep::Reject;
        };

        if bytes.first().is_some_and(|b| *b as char == c) {
            // Safe: we just checked that `bytes` is non-empty
            let (_, rest) = bytes.split_first().unwrap();

            if rest.is_empty() {
                LiteralStep::Done(match kind {
                    LiteralKind::Null => Token::Null,
                    LiteralKind::True => Token::Boolean(true),
                    LiteralKind::False => Token::Boolean(false),
                    LiteralKind::NaN => Token::Number(Number::F64(f64::NAN)),
                    LiteralKind::Infinity => Token::Number(Number::F64(f64::INFINITY)),
                    LiteralKind::NegativeInfinity => {
                        Token::Number(Number::F64(f64::NEG_INFINITY))
                    }
                })
            } else {
                // Still more to go, remember the rest
                self.0 = Some((rest, kind));
                LiteralStep::NeedMore
            }
        } else {
            // Mismatch, restore the state we took at the top
            self.0 = Some((bytes, kind));
            LiteralStep::Reject
        }
    }
}
