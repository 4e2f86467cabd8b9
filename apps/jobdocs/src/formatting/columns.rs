// Column catalogue for the hiring-request form.
// Labels must match the sheet headers byte for byte, including the bilingual
// "日本語 / English" form and the quirks the form itself carries.

use crate::sheet::links::LinkColumn;

/// Column holding the job title used in document names.
pub const JOB_TITLE_COLUMN: &str = "職種タイトル / Job Title";

/// Title used when the job title cell is blank.
pub const UNKNOWN_JOB_TITLE: &str = "不明な求人票";

/// Where the generated JD URL goes. Either label is accepted; new columns get the first.
pub const JD_LINK: LinkColumn = LinkColumn::new(&["ドキュメントリンク", "Document Link"]);

/// Where the internal notes URL goes.
pub const INTERNAL_NOTES_LINK: LinkColumn = LinkColumn::new(&["Internal Notes Link"]);

/// Every link column; never part of any generated content.
pub const LINK_COLUMNS: [LinkColumn; 2] = [JD_LINK, INTERNAL_NOTES_LINK];

/// Columns fed to the JD prompt, in prompt order.
pub const JD_COLUMNS: &[&str] = &[
    "職種タイトル / Job Title",
    "募集背景 / Background of the Recruitment",
    "主な業務内容 / Main Responsibilities",
    "仕事のやりがい・得られる経験 / Job Satisfaction and Experience Gained",
    "期待する役割 / Expected Role",
    "期待するマインド / Expected Mindset",
    "求めるスキル・経験 / Desired Skills and Experience",
    "あると望ましいスキル・経験 / Preferred Skills and Experience",
    "日本語要件 / Japanese Language Requirements",
    "英語要件 / English Language Requirements",
    "こんな方に仲間になってほしい / We are looking for someone like this to join our team.",
    "技術スタック / Technology Stack",
    "使用ツール / Tools Used",
    "参考URL / Reference URL",
];

/// Columns copied verbatim into the internal notes document, in document order.
pub const INTERNAL_NOTES_COLUMNS: &[&str] = &[
    "担当ハイヤリングマネージャー名 / Name of the Responsible Hiring Manager",
    "担当リクルーター名 / Name of the Responsible Recruiter",
    "職種 / Job Title",
    "勤務形態 / Employment Type",
    "勤務地 / Work Location",
    "配属先部署名 / Assigned Department Name",
    "募集背景 / Background of the Recruitment",
    "具体的な募集背景 / Specific Background of the Recruitment",
    "採用納期 / Hiring Deadline",
    "上記の理由/背景をご教示下さい / Please provide the reason/background for the above.",
    "採用温度感 / Urgency of Hiring",
    "想定グレード / Expected Grade",
    "オファー年収のイメージ / Estimated Annual Salary Offer",
    "年齢 / Ageお任せしたい業務 / Tasks to be Assigned",
    "上記をお任せすることにあたって必要な経験・スキル / Experience and Skills Required for the Above-mentioned Tasks",
    "ターゲット企業や業界 / Target Companies and Industries",
    "技術課題の有無 / Presence of Technical Challenges",
    "＜上記質問で「あり_track」を選択した方＞該当課題のURLを展開して下さい / <For those who selected \"Present (Track)\" in the above question> Please provide the URL for the relevant challenge.",
    "＜上記質問で「あり_track以外」を選択した方＞課題を展開して下さい / <For those who selected \"Present (Other than Track)\" in the above question> Please outline the challenge.",
    "技術課題レビュー担当者 / Reviewer for Technical Challenges",
    "カジュアル面談 担当者 / Casual Interview Representative",
    "カジュアル面談担当者の英語対応可否 / English Proficiency of the Casual Interview Representative",
    "一次面接 担当者 / First Interview Representative",
    "一次面接担当者の英語対応可否 / English Proficiency of the First Interview Representative",
    "二次面接 担当者 / Second Interview Representative",
    "二次面接担当者の英語対応可否 / English Proficiency of the Second Interview Representative",
    "最終面接 担当者 / Final Interview Representative",
    "最終面接担当者の英語対応可否 / English Proficiency of the Final Interview Representative",
    "その他 / Otherオファー面談 担当者 / Offer Meeting Representative",
    "エージェント利用可否 / Availability of Agent Usage",
    "ビザサポートが必要な海外在住者に対してオープンしますか？ / Are you open to candidates residing overseas who require visa support?",
];

/// Every header synonym of every link column.
pub fn link_headers() -> Vec<&'static str> {
    LINK_COLUMNS
        .iter()
        .flat_map(|link| link.synonyms.iter().copied())
        .collect()
}
