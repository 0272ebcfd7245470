//! RDF vocabulary used in playlist documents and profile discovery.
//!
//! Well-known namespaces plus a small app vocabulary for the predicates
//! schema.org has no equivalent for.

/// rdf:type
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// schema.org music vocabulary
pub mod schema {
    pub const MUSIC_RECORDING: &str = "http://schema.org/MusicRecording";
    pub const NAME: &str = "http://schema.org/name";
    pub const BY_ARTIST: &str = "http://schema.org/byArtist";
    pub const IN_ALBUM: &str = "http://schema.org/inAlbum";
    pub const DURATION: &str = "http://schema.org/duration";
    pub const IN_LANGUAGE: &str = "http://schema.org/inLanguage";
    pub const DATE_PUBLISHED: &str = "http://schema.org/datePublished";
    pub const GENRE: &str = "http://schema.org/genre";
    pub const THUMBNAIL: &str = "http://schema.org/thumbnail";
    pub const IDENTIFIER: &str = "http://schema.org/identifier";
}

/// Dublin Core terms
pub mod dcterms {
    pub const CREATED: &str = "http://purl.org/dc/terms/created";
}

/// Solid/LDP discovery
pub mod solid {
    /// Links a WebID to its storage root(s)
    pub const PIM_STORAGE: &str = "http://www.w3.org/ns/pim/space#storage";
    /// Links a container to its members
    pub const LDP_CONTAINS: &str = "http://www.w3.org/ns/ldp#contains";
    /// Container type for the Link header when creating one
    pub const LDP_BASIC_CONTAINER: &str = "http://www.w3.org/ns/ldp#BasicContainer";
}

/// App vocabulary for playlist-level structure
pub mod app {
    pub const NS: &str = "https://tunescout.app/vocab#";
    pub const SESSION: &str = "https://tunescout.app/vocab#RecommendationSession";
    pub const DESCRIPTION: &str = "https://tunescout.app/vocab#description";
    pub const SELECTED: &str = "https://tunescout.app/vocab#selected";
    pub const RECOMMENDED: &str = "https://tunescout.app/vocab#recommended";
    pub const PREVIEW: &str = "https://tunescout.app/vocab#preview";
}
