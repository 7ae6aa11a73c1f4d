/// Contains the [update::Update] flags and the [update::UpdateManager].
pub mod update;
