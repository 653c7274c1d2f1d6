pub(crate) mod disable;

pub(crate) use disable::DisableUseCase;
