//! 作业图片上传
//!
//! 构造批改接口需要的 multipart 表单，并提供与后端一致的文件校验。

use reqwest::multipart::{Form, Part};
use std::path::Path;

use crate::error::{ClientError, Result};
use crate::models::{AiProvider, Subject};

/// 单个文件大小上限（10MB）
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// 后端接受的图片类型
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/jpg", "image/webp"];

/// 待上传的作业文件
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub subject: Subject,
    pub provider: AiProvider,
    pub student_id: Option<i64>,
}

impl HomeworkUpload {
    pub fn new(file_name: &str, content_type: &str, bytes: Vec<u8>, subject: Subject) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
            subject,
            provider: AiProvider::default(),
            student_id: None,
        }
    }

    /// 从本地文件读取，按扩展名推断类型并校验
    pub async fn from_path(path: impl AsRef<Path>, subject: Subject) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ClientError::InvalidUpload(format!("无效的文件名: {}", path.display())))?;

        let upload = Self::new(file_name, content_type_for(path), bytes, subject);
        upload.validate()?;
        Ok(upload)
    }

    pub fn with_provider(mut self, provider: AiProvider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_student(mut self, student_id: i64) -> Self {
        self.student_id = Some(student_id);
        self
    }

    /// 校验文件类型与大小
    pub fn validate(&self) -> Result<()> {
        if !ALLOWED_IMAGE_TYPES.contains(&self.content_type.as_str()) {
            return Err(ClientError::InvalidUpload(format!(
                "不支持的文件类型: {}",
                self.content_type
            )));
        }

        if self.bytes.is_empty() {
            return Err(ClientError::InvalidUpload("文件内容为空".into()));
        }

        if self.bytes.len() > MAX_FILE_SIZE {
            return Err(ClientError::InvalidUpload(format!(
                "文件过大。最大支持 {}MB",
                MAX_FILE_SIZE / (1024 * 1024)
            )));
        }

        Ok(())
    }

    /// 批改接口表单：file, subject, provider, 可选 student_id
    pub fn grading_form(&self) -> Result<Form> {
        let form = self
            .base_form()?
            .text("provider", self.provider.as_str());
        Ok(self.append_student(form))
    }

    /// 旧版上传表单：file, subject, 可选 student_id
    pub fn legacy_form(&self) -> Result<Form> {
        let form = self.base_form()?;
        Ok(self.append_student(form))
    }

    fn base_form(&self) -> Result<Form> {
        let part = Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.content_type)?;

        Ok(Form::new()
            .part("file", part)
            .text("subject", self.subject.as_str()))
    }

    fn append_student(&self, form: Form) -> Form {
        match self.student_id {
            Some(id) => form.text("student_id", id.to_string()),
            None => form,
        }
    }
}

/// 按扩展名推断 MIME 类型
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_images() {
        let upload = HomeworkUpload::new("hw.png", "image/png", vec![1, 2, 3], Subject::Math);
        assert!(upload.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_type_and_size() {
        let pdf = HomeworkUpload::new("hw.pdf", "application/pdf", vec![1], Subject::Math);
        assert!(matches!(pdf.validate(), Err(ClientError::InvalidUpload(_))));

        let big = HomeworkUpload::new(
            "hw.jpg",
            "image/jpeg",
            vec![0; MAX_FILE_SIZE + 1],
            Subject::Physics,
        );
        assert!(matches!(big.validate(), Err(ClientError::InvalidUpload(_))));

        let empty = HomeworkUpload::new("hw.jpg", "image/jpeg", Vec::new(), Subject::English);
        assert!(matches!(empty.validate(), Err(ClientError::InvalidUpload(_))));
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(Path::new("a/b/HW.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("x.webp")), "image/webp");
        assert_eq!(content_type_for(Path::new("notes")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_from_path_reads_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("作业.png");
        std::fs::write(&path, [0x89, 0x50, 0x4e, 0x47]).unwrap();

        let upload = HomeworkUpload::from_path(&path, Subject::Math)
            .await
            .unwrap()
            .with_student(7);
        assert_eq!(upload.file_name, "作业.png");
        assert_eq!(upload.content_type, "image/png");
        assert_eq!(upload.student_id, Some(7));

        let txt = dir.path().join("notes.txt");
        std::fs::write(&txt, "hello").unwrap();
        assert!(HomeworkUpload::from_path(&txt, Subject::Math).await.is_err());
    }
}
