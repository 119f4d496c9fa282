//! Per-sentence indexes and the per-token view the rules read.

use neaten_model::{EnhancedDep, Features, Misc, Sentence, Token};

use crate::error::{Result, ValidateError};
use crate::normalize::corrected_form;

/// Regular words of a normalized sentence, addressable by 1-based id.
#[derive(Debug)]
pub struct SentenceView<'s> {
    sentence: &'s Sentence,
    words: Vec<&'s Token>,
    forms: Vec<&'s str>,
    heads: Vec<usize>,
    /// `dependents[h]` lists the ids attached to `h`; index 0 is the root.
    dependents: Vec<Vec<usize>>,
}

impl<'s> SentenceView<'s> {
    /// Index the words of `sentence`. A missing or out-of-range head is fatal.
    pub fn new(sentence: &'s Sentence) -> Result<Self> {
        let words: Vec<&Token> = sentence.words().collect();
        let forms = words.iter().map(|word| word.effective_form()).collect();
        let mut heads = Vec::with_capacity(words.len());
        let mut dependents = vec![Vec::new(); words.len() + 1];
        for (index, word) in words.iter().enumerate() {
            let id = index + 1;
            let head = word.head.ok_or_else(|| ValidateError::MissingHead {
                sent_id: sentence.sent_id.clone(),
                token: id,
                filename: sentence.filename.clone(),
            })?;
            if head > words.len() {
                return Err(ValidateError::DanglingHead {
                    sent_id: sentence.sent_id.clone(),
                    token: id,
                    head,
                    filename: sentence.filename.clone(),
                });
            }
            heads.push(head);
            dependents[head].push(id);
        }
        Ok(Self {
            sentence,
            words,
            forms,
            heads,
            dependents,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn sent_id(&self) -> &'s str {
        &self.sentence.sent_id
    }

    pub fn filename(&self) -> &'s str {
        &self.sentence.filename
    }

    pub fn word(&self, id: usize) -> &'s Token {
        self.words[id - 1]
    }

    /// Effective form of word `id`.
    pub fn form(&self, id: usize) -> &'s str {
        self.forms[id - 1]
    }

    pub fn head(&self, id: usize) -> usize {
        self.heads[id - 1]
    }

    pub fn deprel(&self, id: usize) -> &'s str {
        &self.word(id).deprel
    }

    /// Ids attached to `id`, ascending. `0` gives the root's dependents.
    pub fn dependents(&self, id: usize) -> &[usize] {
        &self.dependents[id]
    }

    pub fn ids(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.words.len()
    }

    /// Build the rule view of word `id`.
    pub fn context(&self, id: usize, prev: Prev<'s>) -> TokenContext<'s> {
        let token = self.word(id);
        let parent_id = self.head(id);
        let parent = (parent_id != 0).then(|| self.word(parent_id));
        let child_ids = self.dependents(id).to_vec();
        let corrected = corrected_form(token);
        let position = if id == self.len() {
            Some(Position::Last)
        } else if id == 1 {
            Some(Position::First)
        } else {
            None
        };
        TokenContext {
            id,
            token,
            tok: self.form(id),
            form: corrected.unwrap_or(&token.form),
            typo_unresolved: corrected.is_none(),
            pos: &token.xpos,
            upos: token.upos.as_str(),
            lemma: &token.lemma,
            func: &token.deprel,
            feats: &token.feats,
            misc: &token.misc,
            edeps: token.deps.as_deref(),
            parent_id,
            parent_tok: if parent_id == 0 {
                "ROOT"
            } else {
                self.form(parent_id)
            },
            parent_lemma: parent.map_or("", |p| p.lemma.as_str()),
            parent_func: parent.map_or("", |p| p.deprel.as_str()),
            parent_pos: parent.map_or("", |p| p.xpos.as_str()),
            parent_upos: parent.map_or("", |p| p.upos.as_str()),
            parent_feats: parent.map(|p| &p.feats),
            parent_misc: parent.map(|p| &p.misc),
            parent_edeps: parent.and_then(|p| p.deps.as_deref()).unwrap_or(&[]),
            parent_child_funcs: if parent_id == 0 {
                Vec::new()
            } else {
                self.funcs_of(self.dependents(parent_id))
            },
            is_parent_copular: self
                .dependents(parent_id)
                .iter()
                .any(|&sibling| self.deprel(sibling) == "cop"),
            children: child_ids.iter().map(|&child| self.form(child)).collect(),
            child_funcs: self.funcs_of(&child_ids),
            child_pos: child_ids
                .iter()
                .map(|&child| self.word(child).xpos.as_str())
                .collect(),
            child_ids,
            prev,
            position,
            sent_id: self.sent_id(),
            doc: self.sentence.doc.as_deref(),
            filename: self.filename(),
        }
    }

    fn funcs_of(&self, ids: &[usize]) -> Vec<&'s str> {
        ids.iter().map(|&id| self.deprel(id)).collect()
    }
}

/// Position of a word at either edge of its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Last,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

/// What the rules need to know about the preceding word.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prev<'s> {
    pub tok: &'s str,
    pub pos: &'s str,
    pub upos: &'s str,
    pub func: &'s str,
    pub parent_lemma: &'s str,
    pub feats: Option<&'s Features>,
    pub misc: Option<&'s Misc>,
}

/// One regular word with its head, dependents and neighbour.
///
/// Parent fields are empty strings for the root's dependents.
#[derive(Debug, Clone)]
pub struct TokenContext<'s> {
    pub id: usize,
    pub token: &'s Token,
    /// Effective form: `CorrectForm` or the (merged) form.
    pub tok: &'s str,
    /// Form after typo resolution, used for closed-class lookups.
    pub form: &'s str,
    /// `Typo=Yes` without `CorrectForm` or a merge.
    pub typo_unresolved: bool,
    pub pos: &'s str,
    pub upos: &'s str,
    pub lemma: &'s str,
    pub func: &'s str,
    pub feats: &'s Features,
    pub misc: &'s Misc,
    pub edeps: Option<&'s [EnhancedDep]>,
    pub parent_id: usize,
    /// Effective form of the head, or `ROOT`.
    pub parent_tok: &'s str,
    pub parent_lemma: &'s str,
    pub parent_func: &'s str,
    pub parent_pos: &'s str,
    pub parent_upos: &'s str,
    pub parent_feats: Option<&'s Features>,
    pub parent_misc: Option<&'s Misc>,
    pub parent_edeps: &'s [EnhancedDep],
    pub parent_child_funcs: Vec<&'s str>,
    /// The word or one of its siblings attaches as `cop`.
    pub is_parent_copular: bool,
    pub children: Vec<&'s str>,
    pub child_funcs: Vec<&'s str>,
    pub child_pos: Vec<&'s str>,
    pub child_ids: Vec<usize>,
    pub prev: Prev<'s>,
    pub position: Option<Position>,
    pub sent_id: &'s str,
    pub doc: Option<&'s str>,
    pub filename: &'s str,
}

impl<'s> TokenContext<'s> {
    pub fn feat(&self, name: &str) -> Option<&'s str> {
        self.feats.get(name)
    }

    pub fn has_feat(&self, name: &str, value: &str) -> bool {
        self.feats.is(name, value)
    }

    pub fn extpos(&self) -> Option<&'s str> {
        self.feat("ExtPos")
    }

    pub fn parent_feat(&self, name: &str) -> Option<&'s str> {
        self.parent_feats.and_then(|feats| feats.get(name))
    }

    pub fn is_promoted(&self) -> bool {
        self.misc.is("Promoted", "Yes")
    }

    pub fn is_parent_promoted(&self) -> bool {
        self.parent_misc.is_some_and(|misc| misc.is("Promoted", "Yes"))
    }

    pub fn has_child_func(&self, func: &str) -> bool {
        self.child_funcs.contains(&func)
    }

    pub fn has_any_child_func(&self, funcs: &[&str]) -> bool {
        funcs.iter().any(|func| self.has_child_func(func))
    }

    pub fn child_func_count(&self, func: &str) -> usize {
        self.child_funcs.iter().filter(|&&f| f == func).count()
    }

    pub fn has_child(&self, form: &str) -> bool {
        self.children.contains(&form)
    }

    pub fn has_any_child(&self, forms: &[&str]) -> bool {
        forms.iter().any(|form| self.has_child(form))
    }

    /// Some child's lowercased form is one of `forms`.
    pub fn has_child_lower(&self, forms: &[&str]) -> bool {
        self.children
            .iter()
            .any(|child| forms.contains(&child.to_lowercase().as_str()))
    }

    /// Form of the first child attached with `func`.
    pub fn child_with_func(&self, func: &str) -> Option<&'s str> {
        self.child_funcs
            .iter()
            .position(|&f| f == func)
            .map(|index| self.children[index])
    }

    /// Head precedes this word.
    pub fn points_right(&self) -> bool {
        self.parent_id != 0 && self.parent_id < self.id
    }

    /// First enhanced relation, when the DEPS column is filled.
    pub fn first_edep(&self) -> Option<&'s EnhancedDep> {
        self.edeps.and_then(<[EnhancedDep]>::first)
    }

    pub fn has_edep(&self, relation: &str, head: usize) -> bool {
        self.edeps
            .is_some_and(|deps| deps.iter().any(|dep| dep.is(relation, head)))
    }

    /// Snapshot for the next word's `prev`.
    pub fn as_prev(&self) -> Prev<'s> {
        Prev {
            tok: self.tok,
            pos: self.pos,
            upos: self.upos,
            func: self.func,
            parent_lemma: self.parent_lemma,
            feats: Some(self.feats),
            misc: Some(self.misc),
        }
    }
}
