pub mod ses;
pub mod step_functions;
