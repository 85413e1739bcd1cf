use custodian_core::AccountStore;

/// Registration and login decisions over an [`AccountStore`].
///
/// Holds nothing but the store handle, so routes build one per request.
/// The operations live in [`crate::use_cases`].
pub struct AccountService<S>
where
    S: AccountStore,
{
    pub(crate) store: S,
}

impl<S> AccountService<S>
where
    S: AccountStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}
