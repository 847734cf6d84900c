//! Read-cache bookkeeping.
//!
//! DESIGN
//! ======
//! Every read is named by a [`QueryKey`]. Keys group into a [`QueryFamily`]
//! that carries a version counter; query hooks track the counter of their
//! family and refetch whenever it moves. Mutations bump the families listed
//! by [`Mutation::invalidates`] after the backend accepts the write, so the
//! next render reflects authoritative state without optimistic edits.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use lending::application::{ApplicationStatus, Transition};
use lending::user::Role;

/// Group of reads invalidated together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryFamily {
    Loans,
    Applications,
    Users,
}

impl QueryFamily {
    fn index(self) -> usize {
        match self {
            Self::Loans => 0,
            Self::Applications => 1,
            Self::Users => 2,
        }
    }
}

/// One cached read.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Loans,
    HomeLoans,
    Loan(String),
    ManagerLoans(String),
    Applications(Option<ApplicationStatus>),
    Application(String),
    MyApplications(String),
    Users(Option<Role>),
    User(String),
}

impl QueryKey {
    #[must_use]
    pub fn family(&self) -> QueryFamily {
        match self {
            Self::Loans | Self::HomeLoans | Self::Loan(_) | Self::ManagerLoans(_) => QueryFamily::Loans,
            Self::Applications(_) | Self::Application(_) | Self::MyApplications(_) => QueryFamily::Applications,
            Self::Users(_) | Self::User(_) => QueryFamily::Users,
        }
    }
}

/// A write the client can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    CreateLoan,
    UpdateLoan,
    DeleteLoan,
    ToggleShowOnHome,
    SubmitApplication,
    Transition(Transition),
    SaveUser,
    UpdateProfile,
    AdminUpdateUser,
}

impl Mutation {
    /// Families whose cached reads become stale once this write succeeds.
    #[must_use]
    pub fn invalidates(self) -> &'static [QueryFamily] {
        match self {
            // Applications keep a loan snapshot; loan writes never touch them.
            Self::CreateLoan | Self::UpdateLoan | Self::DeleteLoan | Self::ToggleShowOnHome => {
                &[QueryFamily::Loans]
            }
            Self::SubmitApplication | Self::Transition(_) => &[QueryFamily::Applications],
            Self::SaveUser | Self::UpdateProfile | Self::AdminUpdateUser => &[QueryFamily::Users],
        }
    }
}

/// Version counter per family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryCache {
    versions: [u64; 3],
}

impl QueryCache {
    #[must_use]
    pub fn version(&self, family: QueryFamily) -> u64 {
        self.versions[family.index()]
    }

    pub fn bump(&mut self, family: QueryFamily) {
        let slot = &mut self.versions[family.index()];
        *slot = slot.wrapping_add(1);
    }

    pub fn invalidate(&mut self, mutation: Mutation) {
        for family in mutation.invalidates() {
            self.bump(*family);
        }
    }
}
