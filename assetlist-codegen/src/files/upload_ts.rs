//! The upload module: bucket constant, path list and upload function, plus
//! the optional metadata constants and per-file document.

use std::path::{Path, PathBuf};

use assetlist_core::{FileRules, GeneratedFile, PathList};
use assetlist_manifest::{FileId, MetadataConfig, UploadConfig};

use crate::{
    CodeFile,
    ast::{Const, Fn, Import, JsArray, JsObject, quote},
    builder::{CodeFragment, Renderable},
    mime::{MimeStrategy, OCTET_STREAM},
};

const MIME_TABLE: &str = "MIME_TYPES";

/// Generated TypeScript module that uploads every listed image to an
/// Appwrite storage bucket.
pub struct UploadTs<'a> {
    output: PathBuf,
    config: &'a UploadConfig,
    paths: &'a PathList,
    mime: MimeStrategy,
    metadata: Option<&'a MetadataConfig>,
}

impl<'a> UploadTs<'a> {
    pub fn new(
        output: impl Into<PathBuf>,
        config: &'a UploadConfig,
        paths: &'a PathList,
        mime: MimeStrategy,
    ) -> Self {
        Self {
            output: output.into(),
            config,
            paths,
            mime,
            metadata: None,
        }
    }

    /// Also record each upload as a document in a database collection.
    pub fn metadata(mut self, metadata: Option<&'a MetadataConfig>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Whether each upload binds `fileId` instead of passing `ID.unique()`
    /// straight to `createFile`.
    fn names_file_id(&self) -> bool {
        self.config.file_id == FileId::Stem || self.metadata.is_some()
    }

    fn imports(&self) -> Vec<Import> {
        let mut clients = vec![self.config.client_name.as_str()];
        clients.extend(self.metadata.map(|m| m.client_name.as_str()));

        let mut sdk = Vec::new();
        if self.config.file_id == FileId::Unique || self.metadata.is_some() {
            sdk.push("ID");
        }
        if self.config.permissions {
            sdk.extend(["Permission", "Role"]);
        }

        let mut imports = vec![Import::new(&self.config.client_module, clients)];
        if !sdk.is_empty() {
            imports.push(Import::new(&self.config.sdk_module, sdk));
        }
        imports
    }

    fn bucket(&self) -> Const {
        Const::new(&self.config.bucket_const, quote(&self.config.bucket_id))
            .comment("Bucket that receives the uploaded files")
            .trailing_comment("Replace with your actual bucket ID")
    }

    fn metadata_targets(&self) -> Option<Vec<CodeFragment>> {
        let metadata = self.metadata?;
        let database = Const::new(&metadata.database_const, quote(&metadata.database_id))
            .comment("Collection that receives one document per uploaded file")
            .trailing_comment("Replace with your actual database ID");
        let collection = Const::new(&metadata.collection_const, quote(&metadata.collection_id))
            .trailing_comment("Replace with your actual collection ID");

        let mut fragments = database.to_fragments();
        fragments.extend(collection.to_fragments());
        Some(fragments)
    }

    fn mime_table(&self) -> Option<Const> {
        let MimeStrategy::Lookup(table) = &self.mime else {
            return None;
        };
        let object = table
            .iter()
            .fold(JsObject::new(), |obj, (ext, mime)| obj.string(ext, mime));
        Some(
            Const::new(MIME_TABLE, object.build())
                .ty("Record<string, string>")
                .private(),
        )
    }

    fn path_list(&self) -> Const {
        let array = JsArray::from_strings(self.paths.paths());
        Const::new(&self.config.list_name, array.build())
            .ty("string[]")
            .private()
    }

    fn file_id_line(&self) -> Option<CodeFragment> {
        if !self.names_file_id() {
            return None;
        }
        let value = match self.config.file_id {
            FileId::Stem => "filename.slice(0, filename.lastIndexOf('.'))",
            FileId::Unique => "ID.unique()",
        };
        Some(CodeFragment::line(format!("const fileId = {};", value)))
    }

    fn file_lines(&self) -> Vec<CodeFragment> {
        match &self.mime {
            MimeStrategy::Single(mime) => vec![CodeFragment::line(format!(
                "const file = new File([blob], filename, {{ type: {} }});",
                quote(mime)
            ))],
            MimeStrategy::Lookup(_) => vec![
                CodeFragment::line("const extension = filename.split('.').pop()?.toLowerCase() ?? '';"),
                CodeFragment::line(format!(
                    "const type = {}[extension] ?? {};",
                    MIME_TABLE,
                    quote(OCTET_STREAM)
                )),
                CodeFragment::line("const file = new File([blob], filename, { type });"),
            ],
        }
    }

    fn permissions(&self) -> Option<CodeFragment> {
        self.config.permissions.then(|| {
            CodeFragment::block(
                "[",
                vec![
                    CodeFragment::line("Permission.read(Role.any()),"),
                    CodeFragment::line("Permission.update(Role.users()),"),
                    CodeFragment::line("Permission.delete(Role.users()),"),
                ],
                Some("]"),
            )
        })
    }

    /// `await <open>(...);` with one argument per line.
    fn call(&self, open: String, mut args: Vec<CodeFragment>) -> CodeFragment {
        args.extend(self.permissions());
        let last = args.pop();
        let mut body: Vec<CodeFragment> = args.into_iter().map(CodeFragment::with_comma).collect();
        body.extend(last);
        CodeFragment::block(format!("await {}(", open), body, Some(");"))
    }

    fn create_file_call(&self) -> CodeFragment {
        let id = if self.names_file_id() { "fileId" } else { "ID.unique()" };
        self.call(
            format!("{}.createFile", self.config.client_name),
            vec![
                CodeFragment::line(&self.config.bucket_const),
                CodeFragment::line(id),
                CodeFragment::line("file"),
            ],
        )
    }

    fn create_document_call(&self, metadata: &MetadataConfig) -> CodeFragment {
        let document = CodeFragment::block(
            "{",
            vec![
                CodeFragment::line("fileId,"),
                CodeFragment::line("fileName: filename,"),
                CodeFragment::line(format!("collection: {},", quote(&metadata.collection))),
            ],
            Some("}"),
        );
        self.call(
            format!("{}.createDocument", metadata.client_name),
            vec![
                CodeFragment::line(&metadata.database_const),
                CodeFragment::line(&metadata.collection_const),
                CodeFragment::line("ID.unique()"),
                document,
            ],
        )
    }

    fn upload_fn(&self) -> Fn {
        let list = &self.config.list_name;

        let mut attempt = vec![
            CodeFragment::line("const response = await fetch(path);"),
            CodeFragment::braced(
                "if (!response.ok) {",
                vec![CodeFragment::line(
                    "throw new Error(`HTTP error! status: ${response.status}`);",
                )],
            ),
            CodeFragment::line("const blob = await response.blob();"),
            CodeFragment::line("const filename = path.split('/').pop()!;"),
        ];
        attempt.extend(self.file_id_line());
        attempt.extend(self.file_lines());
        attempt.extend([CodeFragment::blank(), self.create_file_call()]);
        if let Some(metadata) = self.metadata {
            attempt.extend([CodeFragment::blank(), self.create_document_call(metadata)]);
        }
        attempt.extend([
            CodeFragment::blank(),
            CodeFragment::line("console.log(`[SUCCESS] Uploaded ${filename}`);"),
            CodeFragment::line("successCount++;"),
        ]);

        let each = CodeFragment::braced(
            format!("for (const path of {}) {{", list),
            vec![
                CodeFragment::block("try {", attempt, None),
                CodeFragment::braced(
                    "} catch (error) {",
                    vec![
                        CodeFragment::line(
                            "console.error(`[ERROR] Failed to upload ${path}:`, error);",
                        ),
                        CodeFragment::line("failCount++;"),
                    ],
                ),
            ],
        );

        Fn::new(&self.config.function_name)
            .async_()
            .body_line(format!(
                "console.log(`Starting upload of ${{{}.length}} files...`);",
                list
            ))
            .body_line("let successCount = 0;")
            .body_line("let failCount = 0;")
            .body_blank()
            .body_fragment(each)
            .body_blank()
            .body_line("console.log('Upload complete!');")
            .body_line("console.log(`Successfully uploaded: ${successCount}`);")
            .body_line("console.log(`Failed: ${failCount}`);")
            .body_line(format!("console.log(`Total files: ${{{}.length}}`);", list))
    }
}

impl GeneratedFile for UploadTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.output)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .imports(self.imports())
            .add(self.bucket())
            .add_opt(self.metadata_targets().as_deref())
            .add_opt(self.mime_table())
            .add(self.path_list())
            .add(self.upload_fn())
            .render()
    }
}
