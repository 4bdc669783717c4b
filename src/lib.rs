/*!
tinytz is an embeddable time zone library: a fixed catalog of time zones
is compiled into the binary as flattened IANA transition rules, and the
library answers UTC↔civil conversion queries against it with no runtime
file access, no configuration and no locks.

The rule representation is deliberately dense. A single transition rule
occupies 8 bytes (see [`Rule`]), so a zone's entire post-1800s history
fits in a couple of kilobytes and a backward scan over it stays within a
few cache lines. A single-slot, caller-owned cache ([`Cache`], usually
via [`Resolver`]) makes the dominant access pattern, the same zone
queried with non-decreasing instants, effectively O(1).

# Example

```
use tinytz::{Catalog, Resolver, TimeZone};

let catalog = Catalog::bundled();
let mut resolver = Resolver::new(&catalog);

// 2024-07-15T12:00:00Z is British Summer Time in London.
let local = resolver.to_local(TimeZone::Europe_London, 1721044800).unwrap();
assert_eq!(local, 1721044800 + 3600);
```

# Updating the bundled catalog

The tables in `src/generated/` are produced offline by
`data/create-tables.py` from the IANA Time Zone Database. They are plain
data; regenerating them against a newer tzdata release (or a different
zone list) is the only update mechanism. There is none at runtime, by
design.

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for this
  crate's error type.
* **logging** - Emits records via the `log` crate during catalog
  construction and on cache misses.
* **serde** - `TimeZone` and `Abbreviation` serialize as their canonical
  names.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Dynamic memory is only used off the hot path: building the catalog
// index, the reverse name dictionaries and error messages. Resolution
// and conversion never allocate.
extern crate alloc;

pub use crate::{
    catalog::Catalog,
    civil::{from_iso_string, to_iso_string, DateTime},
    error::Error,
    names::{AbbreviationNames, TimeZoneNames},
    resolve::{Cache, Resolver},
    rule::Rule,
    zone::{Abbreviation, TimeZone},
};

#[macro_use]
mod logging;

mod catalog;
mod civil;
mod error;
mod generated;
mod names;
mod resolve;
mod rule;
mod zone;
