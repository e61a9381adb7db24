//! Rule-based part-of-speech tagger.
//!
//! Assigns a Penn-Treebank-style tag to every token of a sentence. Tagging
//! is fully deterministic and needs no model files:
//!
//! 1. Tokens without any alphanumeric character become punctuation or
//!    symbol tags.
//! 2. Numerals become [`PosTag::Number`].
//! 3. All-caps acronyms (`DNA`, `NSAIDs`) become proper nouns.
//! 4. Closed-class words (determiners, prepositions, pronouns, auxiliaries,
//!    modals, …) are looked up in a fixed lexicon.
//! 5. Capitalized words that do not start the sentence become proper nouns.
//! 6. Open-class words are resolved through a small adjective/noun/verb
//!    lexicon (with regular and irregular verb inflections) and then suffix
//!    rules, using the previous token for disambiguation
//!    (`the results` → noun, `it results` → verb).
//!
//! Only three coarse [`PosBucket`]s matter for statistics; see
//! [`PosTag::bucket`].

use serde::{Deserialize, Serialize};

/// Fine-grained part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    NounPlural,
    ProperNoun,
    ProperNounPlural,
    Adjective,
    AdjectiveComparative,
    AdjectiveSuperlative,
    Verb,
    VerbPast,
    VerbGerund,
    VerbPastParticiple,
    VerbPresent,
    VerbThirdPerson,
    Modal,
    Adverb,
    Determiner,
    Preposition,
    To,
    Conjunction,
    Number,
    Pronoun,
    PossessivePronoun,
    WhDeterminer,
    WhPronoun,
    WhPossessivePronoun,
    WhAdverb,
    Existential,
    Particle,
    Interjection,
    SentenceFinal,
    Comma,
    Colon,
    OpenBracket,
    CloseBracket,
    Quote,
    Symbol,
}

/// Coarse category used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosBucket {
    Noun,
    Adjective,
    Verb,
}

impl PosTag {
    /// The Penn Treebank code for this tag.
    pub fn code(self) -> &'static str {
        match self {
            PosTag::Noun => "NN",
            PosTag::NounPlural => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::ProperNounPlural => "NNPS",
            PosTag::Adjective => "JJ",
            PosTag::AdjectiveComparative => "JJR",
            PosTag::AdjectiveSuperlative => "JJS",
            PosTag::Verb => "VB",
            PosTag::VerbPast => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbPastParticiple => "VBN",
            PosTag::VerbPresent => "VBP",
            PosTag::VerbThirdPerson => "VBZ",
            PosTag::Modal => "MD",
            PosTag::Adverb => "RB",
            PosTag::Determiner => "DT",
            PosTag::Preposition => "IN",
            PosTag::To => "TO",
            PosTag::Conjunction => "CC",
            PosTag::Number => "CD",
            PosTag::Pronoun => "PRP",
            PosTag::PossessivePronoun => "PRP$",
            PosTag::WhDeterminer => "WDT",
            PosTag::WhPronoun => "WP",
            PosTag::WhPossessivePronoun => "WP$",
            PosTag::WhAdverb => "WRB",
            PosTag::Existential => "EX",
            PosTag::Particle => "RP",
            PosTag::Interjection => "UH",
            PosTag::SentenceFinal => ".",
            PosTag::Comma => ",",
            PosTag::Colon => ":",
            PosTag::OpenBracket => "(",
            PosTag::CloseBracket => ")",
            PosTag::Quote => "''",
            PosTag::Symbol => "SYM",
        }
    }

    /// Maps the tag onto its coarse bucket by Penn code family:
    /// `NN*` → noun, `JJ*` → adjective, `VB*` → verb. Everything else,
    /// including modals, is unbucketed.
    pub fn bucket(self) -> Option<PosBucket> {
        let code = self.code();
        if code.starts_with("NN") {
            Some(PosBucket::Noun)
        } else if code.starts_with("JJ") {
            Some(PosBucket::Adjective)
        } else if code.starts_with("VB") {
            Some(PosBucket::Verb)
        } else {
            None
        }
    }

    pub fn is_noun(self) -> bool {
        self.bucket() == Some(PosBucket::Noun)
    }

    pub fn is_verb(self) -> bool {
        self.bucket() == Some(PosBucket::Verb)
    }

    fn is_punctuation(self) -> bool {
        matches!(
            self,
            PosTag::SentenceFinal
                | PosTag::Comma
                | PosTag::Colon
                | PosTag::OpenBracket
                | PosTag::CloseBracket
                | PosTag::Quote
                | PosTag::Symbol
        )
    }

    /// Tags after which an ambiguous noun/verb word reads as a noun.
    fn precedes_nominal(self) -> bool {
        matches!(
            self,
            PosTag::Determiner
                | PosTag::PossessivePronoun
                | PosTag::WhPossessivePronoun
                | PosTag::Adjective
                | PosTag::AdjectiveComparative
                | PosTag::AdjectiveSuperlative
                | PosTag::Number
                | PosTag::Preposition
        )
    }
}

/// Inflection of a recognised verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerbForm {
    Base,
    ThirdPerson,
    Past,
    Participle,
    Gerund,
}

#[derive(Debug, Clone, Copy)]
struct Context<'a> {
    prev: Option<PosTag>,
    prev_word: Option<&'a str>,
    sentence_start: bool,
}

/// Tags the tokens of one sentence. The output has exactly one tag per
/// input token, in order.
pub fn tag_sentence(tokens: &[&str]) -> Vec<PosTag> {
    let mut tags = Vec::with_capacity(tokens.len());
    let mut sentence_start = true;
    let mut prev_word: Option<&str> = None;

    for token in tokens {
        let ctx = Context {
            prev: tags.last().copied(),
            prev_word,
            sentence_start,
        };
        let tag = tag_token(token, ctx);
        if !tag.is_punctuation() {
            sentence_start = false;
            prev_word = Some(*token);
        }
        tags.push(tag);
    }

    tags
}

fn tag_token(token: &str, ctx: Context<'_>) -> PosTag {
    if !token.chars().any(char::is_alphanumeric) {
        return punctuation_tag(token);
    }
    if is_numeral(token) {
        return PosTag::Number;
    }
    if let Some(tag) = acronym_tag(token) {
        return tag;
    }

    let lower = token.to_lowercase();

    if let Some(tag) = closed_class(&lower) {
        return adjust_closed_class(tag, ctx);
    }

    if let Some(stem) = lower
        .strip_suffix("'s")
        .or_else(|| lower.strip_suffix("\u{2019}s"))
    {
        if let Some(tag) = closed_class(stem) {
            return tag;
        }
        return if starts_uppercase(token) && !ctx.sentence_start {
            PosTag::ProperNoun
        } else {
            PosTag::Noun
        };
    }

    if starts_uppercase(token) && !ctx.sentence_start {
        return PosTag::ProperNoun;
    }

    open_class(&lower, ctx)
}

fn punctuation_tag(token: &str) -> PosTag {
    let Some(first) = token.chars().next() else {
        return PosTag::Symbol;
    };
    match first {
        '.' | '!' | '?' => PosTag::SentenceFinal,
        ',' => PosTag::Comma,
        ':' | ';' | '-' | '\u{2013}' | '\u{2014}' | '\u{2026}' => PosTag::Colon,
        '(' | '[' | '{' => PosTag::OpenBracket,
        ')' | ']' | '}' => PosTag::CloseBracket,
        '"' | '\'' | '`' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' => PosTag::Quote,
        _ => PosTag::Symbol,
    }
}

fn is_numeral(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%' | '/' | ':' | '-'))
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

/// `DNA`, `HIV`, `IL6` → NNP; `NSAIDs` → NNPS.
fn acronym_tag(token: &str) -> Option<PosTag> {
    let (body, plural) = match token.strip_suffix('s') {
        Some(stem) if stem.chars().count() >= 2 => (stem, true),
        _ => (token, false),
    };
    let letters = body.chars().filter(|c| c.is_alphabetic()).count();
    let acronym = letters >= 2
        && body.chars().all(char::is_alphanumeric)
        && body
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase);
    match (acronym, plural) {
        (true, true) => Some(PosTag::ProperNounPlural),
        (true, false) => Some(PosTag::ProperNoun),
        _ => None,
    }
}

fn closed_class(word: &str) -> Option<PosTag> {
    let tag = match word {
        "the" | "a" | "an" | "this" | "these" | "those" | "every" | "each" | "some" | "any"
        | "no" | "all" | "both" | "either" | "neither" | "another" | "whatever" => {
            PosTag::Determiner
        }
        "of" | "in" | "on" | "at" | "by" | "for" | "with" | "from" | "into" | "onto" | "upon"
        | "about" | "above" | "across" | "after" | "against" | "along" | "among" | "around"
        | "as" | "before" | "behind" | "below" | "beneath" | "beside" | "between" | "beyond"
        | "despite" | "during" | "except" | "inside" | "like" | "near" | "outside" | "over"
        | "per" | "since" | "than" | "through" | "throughout" | "toward" | "towards"
        | "under" | "underneath" | "unlike" | "until" | "till" | "via" | "within" | "without"
        | "whether" | "if" | "because" | "although" | "though" | "while" | "whereas"
        | "unless" | "that" => PosTag::Preposition,
        "to" => PosTag::To,
        "and" | "or" | "but" | "nor" | "yet" | "plus" => PosTag::Conjunction,
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them"
        | "itself" | "themselves" | "himself" | "herself" | "ourselves" | "yourself"
        | "myself" => PosTag::Pronoun,
        "my" | "your" | "his" | "her" | "its" | "our" | "their" => PosTag::PossessivePronoun,
        "which" | "whichever" => PosTag::WhDeterminer,
        "who" | "whom" | "what" | "whoever" => PosTag::WhPronoun,
        "whose" => PosTag::WhPossessivePronoun,
        "when" | "where" | "why" | "how" | "whenever" | "wherever" => PosTag::WhAdverb,
        "can" | "could" | "may" | "might" | "must" | "shall" | "should" | "will" | "would"
        | "cannot" | "can't" | "won't" | "couldn't" | "shouldn't" | "wouldn't" | "mustn't"
        | "mightn't" => PosTag::Modal,
        "there" => PosTag::Existential,
        "not" | "n't" | "very" | "also" | "often" | "always" | "never" | "however" | "thus"
        | "therefore" | "still" | "already" | "even" | "only" | "just" | "again" | "further"
        | "here" | "then" | "now" | "too" | "quite" | "rather" | "almost" | "well"
        | "together" | "perhaps" | "moreover" | "furthermore" | "nevertheless" | "instead"
        | "soon" | "later" | "ever" | "else" | "so" | "hence" | "indeed" | "once"
        | "sometimes" | "otherwise" => PosTag::Adverb,
        "more" | "less" | "fewer" => PosTag::AdjectiveComparative,
        "most" | "least" | "fewest" => PosTag::AdjectiveSuperlative,
        "up" | "out" | "off" | "down" | "away" | "back" => PosTag::Particle,
        "oh" | "yes" | "hello" | "wow" | "please" => PosTag::Interjection,
        "something" | "anything" | "nothing" | "everything" | "someone" | "anyone"
        | "everyone" | "nobody" | "everybody" => PosTag::Noun,
        "one" | "two" | "three" | "four" | "five" | "six" | "seven" | "eight" | "nine" | "ten"
        | "eleven" | "twelve" | "twenty" | "thirty" | "forty" | "fifty" | "hundred"
        | "thousand" | "million" | "billion" => PosTag::Number,
        "be" => PosTag::Verb,
        "am" | "are" | "aren't" | "have" | "haven't" | "do" | "don't" => PosTag::VerbPresent,
        "is" | "isn't" | "has" | "hasn't" | "does" | "doesn't" => PosTag::VerbThirdPerson,
        "was" | "wasn't" | "were" | "weren't" | "had" | "hadn't" | "did" | "didn't" => {
            PosTag::VerbPast
        }
        "been" | "done" | "gone" => PosTag::VerbPastParticiple,
        "being" | "having" | "doing" => PosTag::VerbGerund,
        _ => return None,
    };
    Some(tag)
}

fn adjust_closed_class(tag: PosTag, ctx: Context<'_>) -> PosTag {
    match tag {
        // "can have", "to be"
        PosTag::VerbPresent if matches!(ctx.prev, Some(PosTag::Modal | PosTag::To)) => {
            PosTag::Verb
        }
        // "there is" vs "stay there"
        PosTag::Existential if !ctx.sentence_start && ctx.prev.is_some_and(PosTag::is_verb) => {
            PosTag::Adverb
        }
        _ => tag,
    }
}

fn is_auxiliary(word: &str) -> bool {
    matches!(
        word,
        "be" | "am"
            | "is"
            | "are"
            | "was"
            | "were"
            | "been"
            | "being"
            | "have"
            | "has"
            | "had"
            | "having"
            | "get"
            | "gets"
            | "got"
            | "become"
            | "became"
    )
}

fn open_class(word: &str, ctx: Context<'_>) -> PosTag {
    if NOUN_PLURALS.contains(&word) {
        return PosTag::NounPlural;
    }
    if NOUN_EXCEPTIONS.contains(&word) {
        return PosTag::Noun;
    }
    if ADJECTIVES.contains(&word) {
        return PosTag::Adjective;
    }
    if let Some(tag) = graded_adjective(word) {
        return tag;
    }
    if let Some(form) = verb_form(word) {
        return resolve_verb(form, ctx);
    }
    suffix_rules(word, ctx)
}

/// `higher` → JJR, `largest` → JJS, `earlier` → JJR.
fn graded_adjective(word: &str) -> Option<PosTag> {
    let grades = [
        ("er", PosTag::AdjectiveComparative),
        ("est", PosTag::AdjectiveSuperlative),
    ];
    for (suffix, tag) in grades {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.len() < 2 {
            continue;
        }
        let candidates = [
            stem.to_string(),
            format!("{stem}e"),
            undouble(stem).unwrap_or_default(),
            stem.strip_suffix('i')
                .map(|s| format!("{s}y"))
                .unwrap_or_default(),
        ];
        if candidates
            .iter()
            .any(|c| !c.is_empty() && ADJECTIVES.contains(&c.as_str()))
        {
            return Some(tag);
        }
    }
    match word {
        "better" | "worse" => Some(PosTag::AdjectiveComparative),
        "best" | "worst" => Some(PosTag::AdjectiveSuperlative),
        _ => None,
    }
}

/// `occurr` → `occur`, `bigg` → `big`.
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && !"aeiou".contains(last) {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}

fn is_verb_base(word: &str) -> bool {
    VERB_BASES.contains(&word)
}

fn verb_form(word: &str) -> Option<VerbForm> {
    if let Some(form) = irregular_verb(word) {
        return Some(form);
    }
    if is_verb_base(word) {
        return Some(VerbForm::Base);
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if is_verb_base(&format!("{stem}y")) {
            return Some(VerbForm::ThirdPerson);
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if is_verb_base(stem) {
            return Some(VerbForm::ThirdPerson);
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        if is_verb_base(stem) {
            return Some(VerbForm::ThirdPerson);
        }
    }

    if let Some(stem) = word.strip_suffix("ied") {
        if is_verb_base(&format!("{stem}y")) {
            return Some(VerbForm::Past);
        }
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if is_verb_base(stem)
            || is_verb_base(&format!("{stem}e"))
            || undouble(stem).is_some_and(|s| is_verb_base(&s))
        {
            return Some(VerbForm::Past);
        }
    }

    if let Some(stem) = word.strip_suffix("ing") {
        if is_verb_base(stem)
            || is_verb_base(&format!("{stem}e"))
            || undouble(stem).is_some_and(|s| is_verb_base(&s))
        {
            return Some(VerbForm::Gerund);
        }
    }

    None
}

fn irregular_verb(word: &str) -> Option<VerbForm> {
    let form = match word {
        "found" | "made" | "took" | "gave" | "led" | "knew" | "saw" | "became" | "began"
        | "got" | "grew" | "held" | "kept" | "left" | "lost" | "met" | "paid" | "ran"
        | "said" | "sent" | "spent" | "thought" | "told" | "understood" | "wrote" | "chose"
        | "drew" | "fell" | "felt" | "brought" | "bought" | "caught" | "taught" | "built"
        | "went" | "came" | "rose" | "drove" | "broke" | "underwent" | "arose" | "sought" => {
            VerbForm::Past
        }
        "shown" | "taken" | "given" | "known" | "seen" | "begun" | "gotten" | "grown"
        | "written" | "chosen" | "drawn" | "fallen" | "risen" | "driven" | "broken"
        | "undergone" | "arisen" => VerbForm::Participle,
        _ => return None,
    };
    Some(form)
}

fn resolve_verb(form: VerbForm, ctx: Context<'_>) -> PosTag {
    let after_nominal_marker = ctx.prev.is_some_and(PosTag::precedes_nominal);
    let after_auxiliary = ctx.prev_word.is_some_and(|w| is_auxiliary(&w.to_lowercase()));

    match form {
        VerbForm::Base => match ctx.prev {
            Some(PosTag::Modal | PosTag::To) => PosTag::Verb,
            Some(PosTag::Pronoun | PosTag::NounPlural | PosTag::ProperNounPlural) => {
                PosTag::VerbPresent
            }
            _ if after_nominal_marker => PosTag::Noun,
            _ if ctx.sentence_start => PosTag::Verb,
            _ => PosTag::VerbPresent,
        },
        VerbForm::ThirdPerson => {
            if after_nominal_marker {
                PosTag::NounPlural
            } else {
                PosTag::VerbThirdPerson
            }
        }
        VerbForm::Past | VerbForm::Participle => {
            if after_auxiliary {
                PosTag::VerbPastParticiple
            } else if after_nominal_marker && ctx.prev != Some(PosTag::Preposition) {
                PosTag::Adjective
            } else if form == VerbForm::Participle {
                PosTag::VerbPastParticiple
            } else {
                PosTag::VerbPast
            }
        }
        VerbForm::Gerund => match ctx.prev {
            Some(
                PosTag::Determiner | PosTag::PossessivePronoun | PosTag::WhPossessivePronoun,
            ) => PosTag::Noun,
            _ => PosTag::VerbGerund,
        },
    }
}

fn suffix_rules(word: &str, ctx: Context<'_>) -> PosTag {
    let len = word.chars().count();

    if len > 4 && word.ends_with("ly") {
        return PosTag::Adverb;
    }
    if len > 5 && word.ends_with("ing") {
        return resolve_verb(VerbForm::Gerund, ctx);
    }
    if len > 4 && word.ends_with("ed") && !word.ends_with("eed") {
        return resolve_verb(VerbForm::Past, ctx);
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return PosTag::Adjective;
    }
    if len > 4 && (word.ends_with("ize") || word.ends_with("ify") || word.ends_with("ise")) {
        return resolve_verb(VerbForm::Base, ctx);
    }
    if matches!(ctx.prev, Some(PosTag::Modal | PosTag::To)) {
        return PosTag::Verb;
    }
    if len > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return PosTag::NounPlural;
    }
    PosTag::Noun
}

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ive", "ful", "less", "able", "ible", "ical", "al", "ic", "ary", "ular", "like",
    "ish",
];

/// Nouns that would otherwise match an adjective or adverb suffix.
const NOUN_EXCEPTIONS: &[&str] = &[
    "trial", "hospital", "animal", "interval", "signal", "journal", "proposal", "approval",
    "individual", "arrival", "removal", "referral", "survival", "withdrawal", "rival",
    "clinic", "topic", "music", "logic", "epidemic", "pandemic", "summary", "library",
    "boundary", "salary", "anniversary", "family", "supply", "assembly", "anomaly", "ally",
    "reply", "rally", "objective", "alternative", "representative", "initiative",
    "detective", "motive", "native", "relative", "sensitive", "material", "potential",
    "principal", "professional", "chemical", "capital", "criminal", "general", "local",
    "mammal", "metal", "mineral", "original", "rational", "vessel", "diagnostic",
    "antibiotic", "table", "variable", "cable", "morning", "evening", "spring", "string",
    "sibling", "ceiling",
];

/// Irregular or invariant plural nouns.
const NOUN_PLURALS: &[&str] = &[
    "people", "children", "women", "men", "mice", "feet", "teeth", "data", "criteria",
    "phenomena", "bacteria", "media", "analyses", "diagnoses", "hypotheses",
];

const ADJECTIVES: &[&str] = &[
    "common", "many", "much", "few", "several", "other", "such", "same", "different", "high",
    "low", "large", "small", "new", "old", "good", "bad", "great", "important",
    "significant", "major", "minor", "main", "early", "late", "long", "short", "young",
    "recent", "current", "available", "possible", "likely", "unlikely", "severe", "mild",
    "acute", "chronic", "normal", "similar", "various", "specific", "overall", "independent",
    "free", "whole", "human", "healthy", "sudden", "rare", "frequent", "consistent",
    "effective", "relevant", "prevalent", "prominent", "dominant", "efficient", "sufficient",
    "adequate", "appropriate", "accurate", "complex", "novel", "certain", "key", "strong",
    "weak", "heavy", "full", "true", "false", "clear", "poor", "rich", "wide", "broad",
    "primary", "secondary", "unknown", "due", "fatal", "vital", "previous", "obese",
    "elderly", "adult", "male", "female", "first", "second", "third", "last", "next", "big",
    "little", "own", "fine", "hard", "easy", "safe", "deep", "able", "aware", "alive", "real",
    "simple", "private", "public", "single", "entire", "additional", "cardiac", "coronary",
    "ischemic", "systolic", "diastolic", "positive", "negative", "moderate", "fit", "sick",
    "ill", "dead", "quick", "slow", "fast", "hot", "cold", "warm", "dry", "wet", "close",
    "far", "evident", "apparent", "persistent", "resistant", "urgent", "adjacent",
    "inherent", "intelligent", "subsequent", "excellent", "permanent", "pregnant",
    "abundant", "constant", "distant", "redundant", "equivalent", "competent", "confident",
    "dependent", "recurrent", "concurrent", "patent", "vigilant",
];

const VERB_BASES: &[&str] = &[
    "accept", "achieve", "affect", "allow", "analyze", "analyse", "appear", "apply", "assess",
    "associate", "assume", "attempt", "believe", "bring", "call", "cause", "change",
    "compare", "complete", "conclude", "confirm", "consider", "contain", "continue",
    "contribute", "control", "correlate", "create", "decrease", "define", "demonstrate",
    "depend", "describe", "design", "detect", "determine", "develop", "diagnose", "differ",
    "discuss", "enable", "enhance", "ensure", "establish", "estimate", "evaluate", "examine",
    "exhibit", "expect", "experience", "explain", "explore", "express", "extend", "fail",
    "feel", "find", "follow", "focus", "form", "get", "give", "go", "help", "highlight",
    "identify", "illustrate", "improve", "include", "increase", "indicate", "induce",
    "influence", "inhibit", "investigate", "involve", "keep", "know", "lack", "lead",
    "limit", "live", "look", "maintain", "make", "manage", "measure", "mediate", "mitigate",
    "modulate", "monitor", "need", "note", "observe", "obtain", "occur", "offer", "perform",
    "persist", "play", "predict", "prevent", "produce", "promote", "protect", "provide",
    "receive", "recommend", "reduce", "reflect", "regulate", "relate", "remain", "report",
    "represent", "require", "result", "reveal", "review", "see", "seem", "serve", "show",
    "stimulate", "suggest", "support", "take", "target", "tend", "test", "treat",
    "underlie", "undergo", "understand", "use", "vary", "work", "yield", "enroll",
    "recruit", "randomize", "assign", "characterize", "quantify", "suffer", "die",
    "survive", "present", "raise", "rise", "run", "say", "seek", "start", "stop", "study",
    "exist", "emerge", "let", "put", "set", "spread", "come", "become", "begin", "grow",
    "hold", "pay", "meet", "choose", "write", "speak", "think", "tell", "try", "want",
    "arise", "benefit", "block", "compromise", "damage", "decline", "deliver",
    "drive", "engage", "facilitate", "handle", "impair", "implement", "inform",
    "integrate", "lower", "mean", "move", "open", "prolong", "pump", "recover", "relieve",
    "replace", "respond", "restore", "select", "share", "strengthen", "trigger", "worsen",
];
