mod export;
mod listing;
mod lookup;
mod submission;
