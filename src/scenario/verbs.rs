//! The closed verb vocabulary and its tense spellings.
//!
//! Step keywords are the tense spellings; Given steps use past tense,
//! When steps present tense, and Then steps future tense. Classification
//! matches on the [`Verb`] identity, never on raw keyword strings.

/// The registered step verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// A component consumes a published message.
    Receive,
    /// A component publishes a message.
    Publish,
    /// A component accepts a request (request/response pairing).
    ReceiveRequest,
    /// A component answers a request with an output field.
    Respond,
    /// Binds two field paths into a correlation relationship.
    Correlate,
}

/// Grammatical tense of a verb spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerbTense {
    Past,
    Present,
    Future,
}

impl Verb {
    pub const ALL: [Verb; 5] = [
        Verb::Receive,
        Verb::Publish,
        Verb::ReceiveRequest,
        Verb::Respond,
        Verb::Correlate,
    ];

    /// The keyword spelling of this verb in the given tense.
    pub fn spelling(self, tense: VerbTense) -> &'static str {
        match (self, tense) {
            (Verb::Receive, VerbTense::Past) => "haveReceived",
            (Verb::Receive, VerbTense::Present) => "receiving",
            (Verb::Receive, VerbTense::Future) => "willReceive",
            (Verb::Publish, VerbTense::Past) => "havePublished",
            (Verb::Publish, VerbTense::Present) => "publishing",
            (Verb::Publish, VerbTense::Future) => "willPublish",
            (Verb::ReceiveRequest, VerbTense::Past) => "haveReceivedRequest",
            (Verb::ReceiveRequest, VerbTense::Present) => "receivingRequest",
            (Verb::ReceiveRequest, VerbTense::Future) => "willReceiveRequest",
            (Verb::Respond, VerbTense::Past) => "haveResponded",
            (Verb::Respond, VerbTense::Present) => "responding",
            (Verb::Respond, VerbTense::Future) => "willRespond",
            (Verb::Correlate, VerbTense::Past) => "haveCorrelated",
            (Verb::Correlate, VerbTense::Present) => "correlating",
            (Verb::Correlate, VerbTense::Future) => "willCorrelate",
        }
    }

    /// Identify a step keyword. Returns `None` for keywords outside the
    /// registered vocabulary.
    pub fn from_keyword(keyword: &str) -> Option<(Verb, VerbTense)> {
        for verb in Verb::ALL {
            for tense in [VerbTense::Past, VerbTense::Present, VerbTense::Future] {
                if verb.spelling(tense) == keyword {
                    return Some((verb, tense));
                }
            }
        }
        None
    }

    /// Whether a keyword is any tense spelling of this verb.
    pub fn matches(self, keyword: &str) -> bool {
        matches!(Verb::from_keyword(keyword), Some((verb, _)) if verb == self)
    }
}
