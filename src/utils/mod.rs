pub fn generate_link_token(length: usize) -> String {
    use std::iter;

    // 随机选择字母和数字
    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    // 生成指定长度的随机字符串
    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_has_requested_length() {
        for len in [6, 8, 12] {
            assert_eq!(generate_link_token(len).len(), len);
        }
    }

    #[test]
    fn test_token_is_alphanumeric() {
        let token = generate_link_token(64);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_vary() {
        let a = generate_link_token(12);
        let b = generate_link_token(12);
        // 碰撞概率约为 62^-12，可以忽略
        assert_ne!(a, b);
    }
}
