use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),

	// -- Catalog
	#[display("Invalid puzzle '{id}': {reason}")]
	InvalidPuzzle { id: u32, reason: String },

	#[display("Catalog file not found: {path}")]
	CatalogFileNotFound { path: String },

	// -- Externals
	#[from]
	SimpleFs(simple_fs::Error),

	#[from]
	SerdeJson(serde_json::Error),

	#[from]
	Toml(toml::de::Error),
}

// region:    --- Constructors

impl Error {
	pub fn invalid_puzzle(id: u32, reason: impl Into<String>) -> Self {
		Self::InvalidPuzzle {
			id,
			reason: reason.into(),
		}
	}

	pub fn catalog_file_not_found(path: impl Into<String>) -> Self {
		Self::CatalogFileNotFound { path: path.into() }
	}
}

// endregion: --- Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
