pub mod certificate;
pub mod experience;
pub mod recommendation;
pub mod talent;
