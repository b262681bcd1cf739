use crate::roster::Roster;

/// 戦闘時間の上限 (8時間)
pub const MAX_BATTLE_SECONDS: u64 = 8 * 60 * 60;

/// 狂戦士の管理人が差し引く時間 (2時間)
const BERSERK_REDUCTION_SECONDS: u64 = 2 * 60 * 60;

/// 両軍のティア合計から実時間での戦闘時間 (秒) を見積もる。乱数は使わない。
pub fn battle_duration(player: &Roster, enemy: &Roster, berserk: bool) -> u64 {
    let tier_sum: u64 = player
        .catalog()
        .iter()
        .map(|u| u64::from(u.tier) * (u64::from(player.count(u.kind)) + u64::from(enemy.count(u.kind))))
        .sum();
    duration_for_tier_sum(tier_sum, berserk)
}

pub(crate) fn duration_for_tier_sum(tier_sum: u64, berserk: bool) -> u64 {
    let raw = ((tier_sum * 2) as f64).powf(1.4).round();
    // 上限を超える値は上限で止めるので、u64 への変換で溢れることはない
    let mut seconds = raw.min((MAX_BATTLE_SECONDS * 4) as f64) as u64;
    if berserk {
        seconds = seconds.saturating_sub(BERSERK_REDUCTION_SECONDS) / 2;
    }
    seconds.min(MAX_BATTLE_SECONDS)
}

/// "1h 2m 3s " 形式に整形する。0 の単位は省略し、全体が 0 なら "Instant"。
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return "Instant".to_owned();
    }
    let hours = seconds / 3600;
    let minutes = seconds / 60 % 60;
    let secs = seconds % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h "));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m "));
    }
    if secs > 0 {
        out.push_str(&format!("{secs}s "));
    }
    out
}
