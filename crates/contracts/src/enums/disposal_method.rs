use serde::{Deserialize, Serialize};

/// Способы списания товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisposalMethod {
    Damaged,
    Expired,
    Lost,
    WriteOff,
}

impl DisposalMethod {
    /// Получить код способа списания
    pub fn code(&self) -> &'static str {
        match self {
            DisposalMethod::Damaged => "damaged",
            DisposalMethod::Expired => "expired",
            DisposalMethod::Lost => "lost",
            DisposalMethod::WriteOff => "write_off",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            DisposalMethod::Damaged => "Повреждение",
            DisposalMethod::Expired => "Истёк срок годности",
            DisposalMethod::Lost => "Утеря",
            DisposalMethod::WriteOff => "Списание",
        }
    }

    /// Получить все способы списания
    pub fn all() -> Vec<DisposalMethod> {
        vec![
            DisposalMethod::Damaged,
            DisposalMethod::Expired,
            DisposalMethod::Lost,
            DisposalMethod::WriteOff,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "damaged" => Some(DisposalMethod::Damaged),
            "expired" => Some(DisposalMethod::Expired),
            "lost" => Some(DisposalMethod::Lost),
            "write_off" => Some(DisposalMethod::WriteOff),
            _ => None,
        }
    }
}

impl ToString for DisposalMethod {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for method in DisposalMethod::all() {
            assert_eq!(DisposalMethod::from_code(method.code()), Some(method));
        }
        assert_eq!(DisposalMethod::from_code("unknown"), None);
    }
}
