// LLM prompt constants for JD generation.
// The template is configuration data: change wording here and bump
// `JD_PROMPT_VERSION` so generated documents can be traced to a revision.

/// Revision of `JD_PROMPT_TEMPLATE` and its appendices. Logged with every generation.
pub const JD_PROMPT_VERSION: &str = "2024-07-bilingual-v1";

/// Appended verbatim to the English-version "English Language Requirements" section.
pub const ENGLISH_REQUIREMENT_NOTE_EN: &str = "(Note: If you have other qualifications or experiences demonstrating English proficiency, such as EIKEN Pre-1, EIKEN 2nd Grade (CSE score 1950+), TOEFL iBT 60+, IELTS 5.0+, or Cambridge FCE.), feel free to discuss with us) For those without a TOEIC 700+ equivalent score, they will be asked to take a designated test during the interview process (generally after the first interview).";

/// Appended verbatim to the Japanese-version 英語要件 section.
pub const ENGLISH_REQUIREMENT_NOTE_JA: &str = "※TOEIC以外にも英語力がわかる資格や経験をお持ちの方はご相談ください例：英検準1級、英検2級（英検CSEスコア1950以上）、TOEFL iBT 60以上、IELTS 5.0以上、ケンブリッジ英語検定FCEなど※その他、英語力がわかる資格や経験については応相談※TOEIC 700点相当以上の資格をお持ちでない方については選考の過程で弊社指定の試験を受験いただきます。（原則、一次面接後を想定）";

/// Appended verbatim to the English-version "Preferred Skills and Experience" section.
pub const AI_EXPERIENCE_NOTE_EN: &str = "Experience in AI development and/or experience in using AI tools to improve development processes.Money Forward recently announced our AI Strategy roadmap which focuses on improving AI-driven operational efficiencies, as well as integrating AI agents into our products to deliver better value to our users. (More information here)";

/// Appended verbatim to the Japanese-version あると望ましいスキル・経験 section.
pub const AI_EXPERIENCE_NOTE_JA: &str = "AIの開発経験もしくはAIツールを使用した開発経験Money Forward AI Vision 2025にて発表の通り、マネーフォワードではAIを使った業務効率化に取り組んでいる状況かつ、将来的には全製品にAIエージェントを導入する想定であるため";

/// JD generation prompt.
/// Replace: {english_requirement_note_en}, {english_requirement_note_ja},
///          {ai_experience_note_en}, {ai_experience_note_ja}, {submitted_information}
pub const JD_PROMPT_TEMPLATE: &str = r#"I would like help creating a job description (JD) based on the submitted information from the hiring department.

I will list the JD sections and submitted information down below.
Please parse out the necessary information from the submitted information and fill in the JD sections accordingly.

Output format:
The output format should start with the JD section header, followed by the submitted information on the next line, as below:
(Section Header)
(Submitted information)

Output language:
I would like you to output two versions of the JD - one in Japanese and one in English.
The submitted information will be mainly written in one language - please first make the JD in that language, and then use that as a base to translate and make the JD in the other language. Other notes:
- The job description sections have both Japanese and English section headers. (Eg '募集背景 / Background of the Recruitment’). Please only output the section headers in that language (eg. For the Japanese version only display '募集背景' and leave out 'Background of the Recruitment').
- Within the Technology Stack and Tools Used sections, please do the same and only output the appropriate language (eg. For the Japanese version only display 'リポジトリ管理' and leave out 'Repository Management').
- For 英語要件 / English Language Requirements section, please always include the following at the end of the section depending on the language:English: {english_requirement_note_en}Japanese: {english_requirement_note_ja}
- For あると望ましいスキル・経験 / Preferred Skills and Experience section, please always include the following at the end of the section depending on the language:English: {ai_experience_note_en}Japanese: {ai_experience_note_ja}


If the submitted information is blank for a certain section, that section can be omitted.

If the submitted information is minimal, please expand the information in that section as necessary, so the candidate has a good idea of the position's details.
Please try to aim for 3-4 sentences when expanding a section.


The JD sections are below:


職種タイトル / Job Title

募集背景 / Background of the Recruitment

主な業務内容 / Main Responsibilities*

仕事のやりがい・得られる経験 / Job Satisfaction and Experience Gained

期待する役割 / Expected Role

期待するマインド / Expected Mindset

求めるスキル・経験 / Desired Skills and Experience*

あると望ましいスキル・経験 / Preferred Skills and Experience*

日本語要件 / Japanese Language Requirements*

英語要件 / English Language Requirements*

こんな方に仲間になってほしい / We are looking for someone like this to join our team.

技術スタック / Technology Stack

使用ツール / Tools Used

参考URL / Reference URL


The submitted information is below:


{submitted_information}
"#;
