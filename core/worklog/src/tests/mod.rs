//! バイナリクレート側の結合テスト（実 FS + 配線を通す）
