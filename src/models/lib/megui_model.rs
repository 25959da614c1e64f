macro_rules! megui_model {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            $($fields:tt)*
        }
        $id:ident
        $builder:ident

    ) => {
        /// Wraps the backend's numeric key for this model. Ids are assigned
        /// by the backend; the core only carries them around.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $id(i64);

        impl $id {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Return the raw numeric key for this ID
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl std::convert::From<i64> for $id {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl std::convert::Into<i64> for $id {
            fn into(self) -> i64 {
                let $id(val) = self;
                val
            }
        }

        $(#[$struct_meta])*
        #[derive(Clone, Debug, PartialEq, getset::Getters, getset::MutGetters, getset::Setters, derive_builder::Builder, serde::Serialize, serde::Deserialize)]
        #[builder(pattern = "owned", setter(into))]
        #[getset(get = "pub", get_mut = "pub(crate)", set = "pub")]
        pub struct $name {
            id: $id,
            $($fields)*
            #[builder(default)]
            active: bool,
            created: chrono::DateTime<chrono::Utc>,
            updated: chrono::DateTime<chrono::Utc>,
            #[builder(setter(strip_option), default)]
            #[serde(default, skip_serializing_if = "Option::is_none")]
            deleted: Option<chrono::DateTime<chrono::Utc>>,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }

            pub fn is_active(&self) -> bool {
                self.active && !self.is_deleted()
            }

            pub fn is_deleted(&self) -> bool {
                self.deleted.is_some()
            }
        }
    }
}
