use crate::error::{EntityKind, FranchiseError};
use crate::model::validate::{ensure_unique, validate_name};
use crate::model::{Branch, FranchiseId};
use serde::{Deserialize, Serialize};
use store_actor::Document;

/// The aggregate root: a franchise and every branch and product it owns.
///
/// # Store Actor
/// This struct implements the [`Document`](store_actor::Document) trait, so whole
/// aggregates can be kept by a [`DocumentActor`](store_actor::DocumentActor). The
/// aggregate is always loaded, changed and stored back as one unit.
///
/// Deserializing checks the same invariants the mutator maintains: non-empty names,
/// sibling ids unique and every branch pointing back at this franchise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FranchiseDocument")]
pub struct Franchise {
    id: FranchiseId,
    name: String,
    branches: Vec<Branch>,
}

impl Franchise {
    pub(crate) fn new(id: FranchiseId, name: String) -> Self {
        Self {
            id,
            name,
            branches: Vec::new(),
        }
    }

    pub fn id(&self) -> &FranchiseId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn branches_mut(&mut self) -> &mut Vec<Branch> {
        &mut self.branches
    }
}

#[derive(Deserialize)]
struct FranchiseDocument {
    id: FranchiseId,
    name: String,
    #[serde(default)]
    branches: Vec<Branch>,
}

impl TryFrom<FranchiseDocument> for Franchise {
    type Error = FranchiseError;

    fn try_from(doc: FranchiseDocument) -> Result<Self, Self::Error> {
        let name = validate_name(doc.name)?;
        ensure_unique(EntityKind::Branch, doc.branches.iter().map(Branch::id))?;
        if let Some(stray) = doc.branches.iter().find(|b| b.franchise_id() != &doc.id) {
            return Err(FranchiseError::InvalidDocument(format!(
                "branch {} belongs to franchise {}, not {}",
                stray.id(),
                stray.franchise_id(),
                doc.id
            )));
        }
        Ok(Self {
            id: doc.id,
            name,
            branches: doc.branches,
        })
    }
}

impl Document for Franchise {
    type Id = FranchiseId;

    fn id(&self) -> &FranchiseId {
        &self.id
    }
}
