// The modules in this directory are generated by data/create-tables.py
// and checked in. Regenerate them to pick up a new tzdata release or to
// change the bundled zone list; do not edit them by hand.

pub(crate) mod abbreviation;
pub(crate) mod rules;
pub(crate) mod timezone;
