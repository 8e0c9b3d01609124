use crate::prelude::*;
use derive_more::Display;
use tracing::trace;

///
/// Verdict
///
/// Which policy rule decided a declaration's fate.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Verdict {
    ExcludedPackage,
    ExcludedClass,
    IncludedClass,
    NotAnIncludedClass,
    IncludedPackage,
    NotInAnIncludedPackage,
    IncludedByDefault,
}

impl Verdict {
    #[must_use]
    pub const fn is_included(self) -> bool {
        matches!(
            self,
            Self::IncludedClass | Self::IncludedPackage | Self::IncludedByDefault
        )
    }
}

///
/// InclusionPolicy
///
/// Ordered exclude/include rules. The first rule that applies decides; later
/// rules are never consulted. Package rules are prefix matches on the
/// qualified identity, class rules are exact matches.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InclusionPolicy {
    pub excluded_packages: Vec<String>,
    pub excluded_classes: Vec<String>,
    pub included_packages: Vec<String>,
    pub included_classes: Vec<String>,
}

impl InclusionPolicy {
    #[must_use]
    pub fn verdict(&self, identity: &str) -> Verdict {
        if self
            .excluded_packages
            .iter()
            .any(|prefix| identity.starts_with(prefix.as_str()))
        {
            Verdict::ExcludedPackage
        } else if self.excluded_classes.iter().any(|class| class == identity) {
            Verdict::ExcludedClass
        } else if !self.included_classes.is_empty() {
            if self.included_classes.iter().any(|class| class == identity) {
                Verdict::IncludedClass
            } else {
                Verdict::NotAnIncludedClass
            }
        } else if !self.included_packages.is_empty() {
            if self
                .included_packages
                .iter()
                .any(|prefix| identity.starts_with(prefix.as_str()))
            {
                Verdict::IncludedPackage
            } else {
                Verdict::NotInAnIncludedPackage
            }
        } else {
            Verdict::IncludedByDefault
        }
    }

    #[must_use]
    pub fn is_included(&self, identity: &str) -> bool {
        self.verdict(identity).is_included()
    }

    /// Keep the declarations the policy admits, preserving their order.
    pub fn select<I>(&self, declarations: I) -> Vec<Declaration>
    where
        I: IntoIterator<Item = Declaration>,
    {
        declarations
            .into_iter()
            .filter(|decl| {
                let verdict = self.verdict(&decl.name);
                trace!(declaration = %decl.name, %verdict, "inclusion policy");

                verdict.is_included()
            })
            .collect()
    }
}

///
/// TESTS
///
