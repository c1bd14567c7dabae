// Seeker profile: storage-facing handlers plus the wizard's helper heuristics
// (strength meter, headline and skill suggestions).

pub mod handlers;
pub mod suggestions;
