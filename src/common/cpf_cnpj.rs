// src/common/cpf_cnpj.rs

// Validação de documentos brasileiros (CPF com 11 dígitos, CNPJ com 14).
// Nenhuma função aqui retorna erro: documento inválido é sempre `false`.

const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Remove tudo que não for dígito ("529.982.247-25" -> "52998224725").
pub fn only_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Aceita CPF ou CNPJ, com ou sem máscara.
pub fn is_valid_cpf_cnpj(raw: &str) -> bool {
    let cleaned = only_digits(raw);

    match cleaned.len() {
        11 => is_valid_cpf(&cleaned),
        14 => is_valid_cnpj(&cleaned),
        _ => false,
    }
}

/// Espera exatamente 11 dígitos, sem máscara.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let Some(digits) = to_digits::<11>(cpf) else {
        return false;
    };

    if all_equal(&digits) {
        return false;
    }

    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

/// Espera exatamente 14 dígitos, sem máscara.
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    let Some(digits) = to_digits::<14>(cnpj) else {
        return false;
    };

    if all_equal(&digits) {
        return false;
    }

    cnpj_check_digit(&digits[..12], &CNPJ_WEIGHTS_FIRST) == digits[12]
        && cnpj_check_digit(&digits[..13], &CNPJ_WEIGHTS_SECOND) == digits[13]
}

// Peso decrescente a partir de (len + 1): 10..2 no primeiro dígito, 11..2 no segundo.
fn cpf_check_digit(digits: &[u32]) -> u32 {
    let first_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(index, digit)| digit * (first_weight - index as u32))
        .sum();

    match (sum * 10) % 11 {
        10 | 11 => 0,
        rest => rest,
    }
}

fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(digit, weight)| digit * weight).sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

fn to_digits<const N: usize>(value: &str) -> Option<[u32; N]> {
    if value.len() != N {
        return None;
    }

    let mut digits = [0u32; N];
    for (slot, c) in digits.iter_mut().zip(value.chars()) {
        *slot = c.to_digit(10)?;
    }
    Some(digits)
}

fn all_equal(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_valid_cpfs() {
        assert!(is_valid_cpf_cnpj("529.982.247-25"));
        assert!(is_valid_cpf_cnpj("12345678909"));
        assert!(is_valid_cpf("52998224725"));
    }

    #[test]
    fn accepts_known_valid_cnpjs() {
        assert!(is_valid_cpf_cnpj("11.222.333/0001-81"));
        assert!(is_valid_cpf_cnpj("11222333000181"));
        assert!(is_valid_cnpj("11222333000181"));
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert!(!is_valid_cpf_cnpj("529.982.247-24"));
        assert!(!is_valid_cpf_cnpj("12345678900"));
        assert!(!is_valid_cpf_cnpj("11.222.333/0001-80"));
        assert!(!is_valid_cpf_cnpj("11222333000191"));
        // 14 dígitos que não passam no CNPJ
        assert!(!is_valid_cpf_cnpj("12345678901234"));
    }

    #[test]
    fn rejects_repeated_digit_sequences() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            let cnpj = d.to_string().repeat(14);
            assert!(!is_valid_cpf_cnpj(&cpf), "cpf {cpf}");
            assert!(!is_valid_cpf_cnpj(&cnpj), "cnpj {cnpj}");
        }
    }

    #[test]
    fn rejects_wrong_lengths_and_empty_input() {
        assert!(!is_valid_cpf_cnpj("123"));
        assert!(!is_valid_cpf_cnpj(""));
        assert!(!is_valid_cpf_cnpj("abc.def.ghi-jk"));
        assert!(!is_valid_cpf_cnpj("529.982.247-250"));
    }

    #[test]
    fn inner_checks_require_bare_digits() {
        assert!(!is_valid_cpf("529.982.247-25"));
        assert!(!is_valid_cnpj("11.222.333/0001-81"));
        assert!(!is_valid_cpf("5299822472"));
    }

    #[test]
    fn strips_mask_characters() {
        assert_eq!(only_digits("11.222.333/0001-81"), "11222333000181");
        assert_eq!(only_digits(" 529 982 247 25 "), "52998224725");
    }
}
